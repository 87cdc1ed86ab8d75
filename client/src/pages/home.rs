//! Landing page at `/`.

use leptos::prelude::*;

use crate::pages::courses::CourseList;
use crate::state::courses::CoursesState;

#[component]
pub fn HomePage() -> impl IntoView {
    let courses = expect_context::<RwSignal<CoursesState>>();

    view! {
        <div class="home-page">
            <h1>"VOLTX"</h1>
            <p class="home-page__subtitle">"电力知识库与在线学习平台"</p>
            <Show when=move || courses.get().query.is_some()>
                <CourseList/>
            </Show>
        </div>
    }
}
