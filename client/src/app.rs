//! Root application component with routing and context providers.

use leptos::prelude::*;
use leptos_meta::{MetaTags, Stylesheet, Title, provide_meta_context};
use leptos_router::{
    StaticSegment,
    components::{Route, Router, Routes},
};

use crate::components::header::SiteHeader;
use crate::components::toasts::Toasts;
use crate::config::ApiConfig;
use crate::pages::{courses::CoursesPage, home::HomePage, section::SectionPage};
use crate::state::{
    auth::AuthState, courses::CoursesState, notify::NotificationsState, store::TokenStore,
};

/// HTML shell rendered on the server for SSR + hydration.
pub fn shell(options: LeptosOptions) -> impl IntoView {
    view! {
        <!DOCTYPE html>
        <html lang="zh-CN">
            <head>
                <meta charset="utf-8"/>
                <meta name="viewport" content="width=device-width, initial-scale=1"/>
                <AutoReload options=options.clone()/>
                <HydrationScripts options/>
                <MetaTags/>
            </head>
            <body>
                <App/>
            </body>
        </html>
    }
}

/// Root application component.
///
/// Provides the shared state contexts and the store, then renders the header
/// above the routed pages.
#[component]
pub fn App() -> impl IntoView {
    provide_meta_context();

    let auth = RwSignal::new(AuthState::default());
    let courses = RwSignal::new(CoursesState::default());
    let notices = RwSignal::new(NotificationsState::default());
    let store = TokenStore::new(auth, courses, notices, ApiConfig::from_build_env());

    provide_context(auth);
    provide_context(courses);
    provide_context(notices);
    provide_context(store);

    // Effects only run in the browser, where the persisted session lives.
    Effect::new(move || store.restore());

    view! {
        <Stylesheet id="leptos" href="/pkg/voltx.css"/>
        <Title text="VOLTX"/>

        <Router>
            <SiteHeader/>
            <main class="layout-content">
                <Routes fallback=|| "Page not found.".into_view()>
                    <Route path=StaticSegment("") view=HomePage/>
                    <Route path=StaticSegment("courses") view=CoursesPage/>
                    <Route path=StaticSegment("knowledge") view=|| view! { <SectionPage title="知识库"/> }/>
                    <Route path=StaticSegment("prediction") view=|| view! { <SectionPage title="AI预测"/> }/>
                    <Route path=StaticSegment("achievement") view=|| view! { <SectionPage title="学习成就"/> }/>
                    <Route path=StaticSegment("profile") view=|| view! { <SectionPage title="用户中心"/> }/>
                </Routes>
            </main>
            <Toasts/>
        </Router>
    }
}
