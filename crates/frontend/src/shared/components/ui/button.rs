use leptos::prelude::*;

/// Button with `primary` (default), `secondary` or `ghost` variant
#[component]
pub fn Button(
    /// Button variant: "primary" (default), "secondary", or "ghost"
    #[prop(optional, into)]
    variant: MaybeProp<String>,
    /// Button type attribute, "button" by default
    #[prop(optional, into)]
    button_type: MaybeProp<String>,
    #[prop(optional, into)] id: MaybeProp<String>,
    /// Rendered with `display: none` while false
    #[prop(optional, into)]
    visible: MaybeProp<bool>,
    #[prop(optional)] on_click: Option<Callback<leptos::ev::MouseEvent>>,
    children: Children,
) -> impl IntoView {
    let variant_class = move || match variant.get().as_deref().unwrap_or("primary") {
        "secondary" => "button--secondary",
        "ghost" => "button--ghost",
        _ => "button--primary",
    };
    let btn_type = move || button_type.get().unwrap_or_else(|| "button".to_string());
    let display = move || {
        if visible.get().unwrap_or(true) {
            "inline-block"
        } else {
            "none"
        }
    };

    view! {
        <button
            id=move || id.get()
            type=btn_type
            class=move || format!("button {}", variant_class())
            style:display=display
            on:click=move |ev| {
                if let Some(handler) = on_click {
                    handler.run(ev);
                }
            }
        >
            {children()}
        </button>
    }
}
