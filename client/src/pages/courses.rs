//! Course listing page and the shared search result list.

use leptos::prelude::*;

use crate::state::courses::CoursesState;
use crate::state::store::TokenStore;

/// Renders the latest course search results from shared state.
#[component]
pub fn CourseList() -> impl IntoView {
    let courses = expect_context::<RwSignal<CoursesState>>();
    let store = expect_context::<TokenStore>();

    view! {
        <section class="course-list">
            <Show when=move || courses.get().query.is_some()>
                <p class="course-list__query">
                    "搜索: " {move || courses.get().query.unwrap_or_default()}
                </p>
            </Show>
            <Show when=move || courses.get().error.is_some()>
                <p class="course-list__error">{move || courses.get().error.unwrap_or_default()}</p>
            </Show>
            <Show when=move || !courses.get().loading fallback=|| view! { <p>"加载中..."</p> }>
                <Show
                    when=move || !courses.get().items.is_empty()
                    fallback=|| view! { <p class="course-list__empty">"暂无课程"</p> }
                >
                    <ul class="course-list__items">
                        <For
                            each=move || courses.get().items
                            key=|course| course.id
                            children=move |course| {
                                let cover = course.cover.as_deref().map(|c| store.media_url(c));
                                view! {
                                    <li class="course-card">
                                        {cover.map(|src| view! { <img class="course-card__cover" src=src alt=""/> })}
                                        <h3 class="course-card__title">{course.title}</h3>
                                        <p class="course-card__description">
                                            {course.description.unwrap_or_default()}
                                        </p>
                                    </li>
                                }
                            }
                        />
                    </ul>
                </Show>
            </Show>
        </section>
    }
}

/// `/courses` route.
#[component]
pub fn CoursesPage() -> impl IntoView {
    view! {
        <div class="courses-page">
            <h1>"在线课程"</h1>
            <CourseList/>
        </div>
    }
}
