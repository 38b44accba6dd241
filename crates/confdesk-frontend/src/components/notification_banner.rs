use confdesk_bridge::notification::NotificationKind;
use gpui::{
    App, ClickEvent, IntoElement, ParentElement, Styled, Window, div, prelude::FluentBuilder,
};
use gpui_component::{
    ActiveTheme, StyledExt,
    button::{Button, ButtonVariants},
};

use crate::entities::notifications_entity::Notification;

/// A dismissible banner communicating a single operation outcome.
#[derive(IntoElement)]
pub struct NotificationBanner {
    notification: Notification,
    on_dismiss: Option<Box<dyn Fn(&ClickEvent, &mut Window, &mut App) + 'static>>,
}

impl NotificationBanner {
    pub fn new(notification: Notification) -> Self {
        Self {
            notification,
            on_dismiss: None,
        }
    }

    pub fn on_dismiss(
        mut self,
        handler: impl Fn(&ClickEvent, &mut Window, &mut App) + 'static,
    ) -> Self {
        self.on_dismiss = Some(Box::new(handler));
        self
    }
}

impl gpui::RenderOnce for NotificationBanner {
    fn render(self, _: &mut gpui::Window, cx: &mut gpui::App) -> impl IntoElement {
        let (background, foreground) = match self.notification.kind {
            NotificationKind::Success => (cx.theme().success, cx.theme().success_foreground),
            NotificationKind::Fail => (cx.theme().danger, cx.theme().danger_foreground),
        };
        let Self {
            notification,
            on_dismiss,
        } = self;

        div()
            .w_full()
            .flex()
            .items_center()
            .justify_between()
            .gap_3()
            .p_3()
            .rounded_md()
            .bg(background)
            .text_color(foreground)
            .child(div().child(notification.message).font_semibold())
            .child(
                div()
                    .flex()
                    .items_center()
                    .gap_3()
                    .child(div().text_sm().child(notification.timestamp))
                    .when(on_dismiss.is_some(), |this| {
                        let handler = on_dismiss.unwrap();
                        this.child(
                            Button::new(("dismiss-notification", notification.id as usize))
                                .ghost()
                                .label("×")
                                .on_click(move |event, window, cx| handler(event, window, cx)),
                        )
                    }),
            )
    }
}
