use super::messages::Message;
use super::state::{App, MAX_ZOOM, MIN_ZOOM, PAGE_HEIGHT_PX, PAGE_WIDTH_PX};
use crate::animation::CornerGeometry;
use crate::assets;
use iced::alignment::{Horizontal, Vertical};
use iced::widget::{Stack, button, checkbox, column, container, image, row, slider, text};
use iced::{Background, Color, Element, Length};

impl App {
    pub fn view(&self) -> Element<'_, Message> {
        let top = self.book.top_visible_sheet();
        let sheet = self.book.sheets()[top];
        let sheet_view = self.book.views()[top];

        let page_width = PAGE_WIDTH_PX * self.viewer.zoom;
        let page_height = PAGE_HEIGHT_PX * self.viewer.zoom;
        let spread_width = page_width * 2.0;

        let spread = row![
            self.page_face(sheet.left, page_width, page_height),
            self.page_face(sheet.right, page_width, page_height),
        ]
        .spacing(2);

        let mut layers: Vec<Element<'_, Message>> = vec![spread.into()];
        if sheet_view.left_curl.progress > 0.0 {
            layers.push(curl_overlay(
                sheet_view.left_curl,
                spread_width,
                page_height,
                Horizontal::Left,
            ));
        }
        if sheet_view.right_curl.progress > 0.0 {
            layers.push(curl_overlay(
                sheet_view.right_curl,
                spread_width,
                page_height,
                Horizontal::Right,
            ));
        }
        let book_area = Stack::with_children(layers)
            .width(Length::Fixed(spread_width))
            .height(Length::Fixed(page_height));

        let prev_button = if self.book.can_go_backward() {
            button("Previous").on_press(Message::PreviousPage)
        } else {
            button("Previous")
        };
        let next_button = if self.book.can_go_forward() {
            button("Next").on_press(Message::NextPage)
        } else {
            button("Next")
        };

        let position_label = if self.book.front_cover() {
            "Front cover".to_string()
        } else if self.book.back_cover() {
            "Back cover".to_string()
        } else {
            format!("Sheet {} of {}", self.book.current() + 1, self.book.sheets().len())
        };

        let controls = row![
            prev_button,
            next_button,
            text(position_label),
            column![
                text(format!("Zoom: {:.1}x", self.viewer.zoom)),
                slider(MIN_ZOOM..=MAX_ZOOM, self.viewer.zoom, Message::ZoomChanged).step(0.05),
            ]
            .spacing(4)
            .width(Length::Fixed(180.0)),
            checkbox("Flip sound", self.viewer.sound_enabled).on_toggle(Message::SoundToggled),
        ]
        .spacing(10)
        .align_y(Vertical::Center);

        container(
            column![book_area, controls]
                .spacing(16)
                .align_x(Horizontal::Center),
        )
        .width(Length::Fill)
        .height(Length::Fill)
        .align_x(Horizontal::Center)
        .align_y(Vertical::Center)
        .into()
    }

    fn page_face(&self, page: Option<usize>, width: f32, height: f32) -> Element<'_, Message> {
        match page {
            Some(page) => column![
                image(image::Handle::from_path(self.page_image(page)))
                    .width(Length::Fixed(width))
                    .height(Length::Fixed(height)),
                text(assets::page_label(page)).size(12),
            ]
            .spacing(4)
            .align_x(Horizontal::Center)
            .into(),
            // Cover backing: the front cover has no left face and the back
            // cover no right face.
            None => container("")
                .width(Length::Fixed(width))
                .height(Length::Fixed(height))
                .style(|_theme| container::Style {
                    background: Some(Background::Color(Color::from_rgb(0.25, 0.18, 0.12))),
                    ..container::Style::default()
                })
                .into(),
        }
    }
}

/// Translucent wedge growing out of the bottom corner while a peel runs.
/// The fold angle is published with the geometry but is not rendered by
/// this simple surface.
fn curl_overlay(
    geometry: CornerGeometry,
    width: f32,
    height: f32,
    side: Horizontal,
) -> Element<'static, Message> {
    let shade = Color::from_rgba(0.05, 0.05, 0.08, 0.2 + 0.3 * geometry.progress);
    container(
        container("")
            .width(Length::Fixed(geometry.ex.max(1.0)))
            .height(Length::Fixed(geometry.ey.max(1.0)))
            .style(move |_theme| container::Style {
                background: Some(Background::Color(shade)),
                ..container::Style::default()
            }),
    )
    .width(Length::Fixed(width))
    .height(Length::Fixed(height))
    .align_x(side)
    .align_y(Vertical::Bottom)
    .into()
}
