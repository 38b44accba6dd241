use gpui::{AppContext, Context, Entity, IntoElement, ParentElement, Render, Styled, Window, div};
use gpui_component::{
    StyledExt,
    button::{Button, ButtonVariants},
    group_box::{GroupBox, GroupBoxVariants},
    input::{Input as TextInput, InputState},
};

use crate::BackendBridge;
use crate::entities::DataEntities;

pub struct SettingsPage {
    address_state: Entity<InputState>,
}

impl SettingsPage {
    pub fn new(data: &DataEntities, window: &mut Window, cx: &mut Context<Self>) -> Self {
        let address = {
            let settings_state = data.settings.read(cx);
            settings_state.config.server_config.address.clone()
        };

        let address_state = cx.new(|cx| {
            InputState::new(window, cx)
                .placeholder("http://127.0.0.1:5000")
                .default_value(address)
        });

        // Refresh the field once the backend confirms a configuration change.
        let settings = data.settings.clone();
        cx.observe_in(&settings, window, move |this, entity, window, cx| {
            let address = {
                let state = entity.read(cx);
                state.config.server_config.address.clone()
            };
            this.address_state.update(cx, |state, cx| {
                state.set_value(address, window, cx);
            });
        })
        .detach();

        Self { address_state }
    }
}

impl Render for SettingsPage {
    fn render(&mut self, _: &mut Window, cx: &mut Context<Self>) -> impl IntoElement {
        div()
            .size_full()
            .flex()
            .flex_col()
            .gap_6()
            .child(div().child("Настройки").text_2xl().font_bold())
            .child(
                GroupBox::new()
                    .outline()
                    .child(div().child("Сервер управления").text_xl().font_bold())
                    .child(
                        div()
                            .w_full()
                            .flex()
                            .items_center()
                            .justify_between()
                            .child(div().child("Адрес сервера").font_semibold())
                            .child(TextInput::new(&self.address_state).min_w_72()),
                    )
                    .child(
                        div().w_full().flex().justify_end().child(
                            Button::new("save_server_address")
                                .primary()
                                .label("Сохранить")
                                .on_click(cx.listener(|this, _, _, cx| {
                                    let bridge = cx.global::<BackendBridge>().clone();
                                    let address =
                                        this.address_state.read(cx).value().to_string();
                                    cx.spawn(async move |_, _| {
                                        bridge.update_server_address(address).await;
                                    })
                                    .detach();
                                })),
                        ),
                    ),
            )
    }
}
