mod editor_page;
mod settings_page;

use gpui::{AnyView, AppContext, Context, IntoElement, ParentElement, Render, Styled, Window, div};
use gpui_component::{
    IconName, Side,
    sidebar::{Sidebar, SidebarGroup, SidebarHeader, SidebarMenu, SidebarMenuItem},
};

use crate::{
    components::notification_banner::NotificationBanner,
    entities::DataEntities,
    views::{editor_page::EditorPage, settings_page::SettingsPage},
};

#[derive(Clone, Copy, PartialEq, Eq)]
pub enum PageUi {
    Editor,
    Settings,
}

pub struct FrontendUi {
    data: DataEntities,
    active_page: PageUi,
    active_page_view: AnyView,
}

impl FrontendUi {
    pub fn new(data: &DataEntities, window: &mut Window, cx: &mut Context<Self>) -> Self {
        // The banner stack renders straight from the notifications entity.
        cx.observe(&data.notifications, |_, _, cx| cx.notify()).detach();

        let initial_view = cx.new(|cx| EditorPage::new(data, window, cx)).into();
        Self {
            data: data.clone(),
            active_page: PageUi::Editor,
            active_page_view: initial_view,
        }
    }

    pub fn change_page(&mut self, page: PageUi, window: &mut Window, cx: &mut Context<Self>) {
        let new_page = match page {
            PageUi::Editor => cx.new(|cx| EditorPage::new(&self.data, window, cx)).into(),
            PageUi::Settings => cx
                .new(|cx| SettingsPage::new(&self.data, window, cx))
                .into(),
        };
        self.active_page = page;
        self.active_page_view = new_page;
        cx.notify();
    }
}

impl Render for FrontendUi {
    fn render(&mut self, _: &mut Window, cx: &mut Context<Self>) -> impl IntoElement {
        let notifications = self.data.notifications.read(cx).items().to_vec();
        let banners: Vec<_> = notifications
            .into_iter()
            .map(|notification| {
                let id = notification.id;
                NotificationBanner::new(notification).on_dismiss(cx.listener(
                    move |this, _, _, cx| {
                        this.data.notifications.update(cx, |model, cx| {
                            model.dismiss(id);
                            cx.notify();
                        });
                    },
                ))
            })
            .collect();

        let on_page_change = |page| {
            cx.listener(move |this, _, window, cx| {
                this.change_page(page, window, cx);
            })
        };

        div()
            .flex()
            .size_full()
            .child(
                Sidebar::new(Side::Left)
                    .header(SidebarHeader::new().child("confdesk"))
                    .child(
                        SidebarGroup::new("Навигация").child(
                            SidebarMenu::new()
                                .child(
                                    SidebarMenuItem::new("Редактор")
                                        .active(self.active_page == PageUi::Editor)
                                        .icon(IconName::LayoutDashboard)
                                        .on_click(on_page_change(PageUi::Editor)),
                                )
                                .child(
                                    SidebarMenuItem::new("Настройки")
                                        .active(self.active_page == PageUi::Settings)
                                        .icon(IconName::Settings)
                                        .on_click(on_page_change(PageUi::Settings)),
                                ),
                        ),
                    ),
            )
            .child(
                div()
                    .p_5()
                    .size_full()
                    .flex()
                    .flex_col()
                    .gap_3()
                    .children(banners)
                    .child(div().size_full().child(self.active_page_view.clone())),
            )
    }
}
