use confdesk_bridge::config_type::ConfigType;
use gpui::{
    AppContext, Context, Entity, IntoElement, ParentElement, Render, SharedString, Styled, Window,
    div,
};
use gpui_component::{
    IndexPath, StyledExt,
    button::{Button, ButtonVariants},
    input::{Input as TextInput, InputState},
    select::{Select, SelectEvent, SelectItem, SelectState},
};

use crate::BackendBridge;
use crate::entities::DataEntities;

#[derive(Debug, Clone)]
struct ConfigTypeItem {
    display_name: SharedString,
    value: ConfigType,
}

impl ConfigTypeItem {
    pub fn new(display_name: &'static str, value: ConfigType) -> Self {
        Self {
            display_name: display_name.into(),
            value,
        }
    }
}

impl SelectItem for ConfigTypeItem {
    type Value = ConfigType;

    fn title(&self) -> SharedString {
        self.display_name.clone()
    }

    fn value(&self) -> &Self::Value {
        &self.value
    }
}

pub struct EditorPage {
    is_saving: bool,
    config_type_selector: Entity<SelectState<Vec<ConfigTypeItem>>>,
    editor_state: Entity<InputState>,
}

impl EditorPage {
    pub fn new(data: &DataEntities, window: &mut Window, cx: &mut Context<Self>) -> Self {
        let config_type_selector = cx.new(|cx| {
            let items = vec![
                ConfigTypeItem::new("Провайдеры", ConfigType::Providers),
                ConfigTypeItem::new("Логины", ConfigType::Logins),
                ConfigTypeItem::new("Шаблоны инстансов", ConfigType::Instances),
            ];

            let selected = {
                let document = data.document.read(cx);
                items
                    .iter()
                    .position(|item| item.value == document.config_type)
            };

            SelectState::new(items, selected.map(IndexPath::new), window, cx)
        });

        let editor_state = cx.new(|cx| {
            InputState::new(window, cx)
                .multi_line(true)
                .placeholder("Содержимое конфигурации...")
                .default_value(data.document.read(cx).content.clone())
        });

        // Reload the editor whenever a fresh document arrives from the backend.
        let document = data.document.clone();
        cx.observe_in(&document, window, move |this, entity, window, cx| {
            let content = {
                let state = entity.read(cx);
                state.content.clone()
            };
            this.editor_state.update(cx, |state, cx| {
                state.set_value(content, window, cx);
            });
        })
        .detach();

        // A finished save reports back as a notification, whatever the
        // outcome; drop the loading state then.
        cx.observe(&data.notifications, |this, _, cx| {
            this.is_saving = false;
            cx.notify();
        })
        .detach();

        cx.subscribe_in(
            &config_type_selector,
            window,
            |_, _, event, _, cx| match event {
                SelectEvent::Confirm(value) => {
                    let selected_value = value.clone();
                    if selected_value.is_none() {
                        return;
                    }

                    let config_type = selected_value.expect("failed to get the selected value");
                    let bridge = cx.global::<BackendBridge>().clone();
                    cx.spawn(async move |_, _| {
                        bridge.fetch_content(config_type).await;
                    })
                    .detach();
                }
            },
        )
        .detach();

        Self {
            is_saving: false,
            config_type_selector,
            editor_state,
        }
    }
}

impl Render for EditorPage {
    fn render(&mut self, _: &mut Window, cx: &mut Context<Self>) -> impl IntoElement {
        div()
            .size_full()
            .flex()
            .flex_col()
            .gap_3()
            .child(div().child("Редактор конфигураций").text_2xl().font_bold())
            .child(
                div()
                    .flex()
                    .items_center()
                    .justify_between()
                    .gap_3()
                    .child(
                        Select::new(&self.config_type_selector)
                            .min_w_72()
                            .placeholder("Выберите тип конфигурации..."),
                    )
                    .child(
                        Button::new("save_content")
                            .primary()
                            .loading(self.is_saving)
                            .label("Сохранить")
                            .on_click(cx.listener(move |this, _, _, cx| {
                                let bridge = cx.global::<BackendBridge>().clone();
                                let config_type = this
                                    .config_type_selector
                                    .read(cx)
                                    .selected_value()
                                    .cloned()
                                    .unwrap_or_default();
                                let content = this.editor_state.read(cx).value().to_string();

                                this.is_saving = true;
                                cx.notify();
                                cx.spawn(async move |_, _| {
                                    bridge.save_content(config_type, content).await;
                                })
                                .detach();
                            })),
                    ),
            )
            .child(
                div()
                    .size_full()
                    .child(TextInput::new(&self.editor_state).h_full()),
            )
    }
}
