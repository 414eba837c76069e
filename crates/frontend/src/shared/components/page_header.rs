use leptos::prelude::*;

/// Title row of a page. Children, when given, are the action buttons on the right.
#[component]
pub fn PageHeader(
    #[prop(into)] title: Signal<String>,
    /// Second line under the title, hidden while `None`
    #[prop(optional, into)]
    subtitle: MaybeProp<String>,
    #[prop(optional)]
    children: Option<Children>,
) -> impl IntoView {
    let subtitle_line = move || {
        subtitle
            .get()
            .filter(|s| !s.is_empty())
            .map(|s| view! { <div class="page-header__subtitle">{s}</div> })
    };

    view! {
        <header class="page-header">
            <div class="page-header__text">
                <h1 class="page-header__title">{move || title.get()}</h1>
                {subtitle_line}
            </div>
            <div class="page-header__actions">{children.map(|c| c())}</div>
        </header>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_header_builds_without_actions() {
        let props = PageHeaderProps::builder()
            .title(Signal::stored(String::from("Dashboard")))
            .build();
        assert!(props.children.is_none());
    }
}
