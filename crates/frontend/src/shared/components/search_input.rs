use crate::shared::debounce::{use_debounced, DEFAULT_DEBOUNCE_MS};
use leptos::prelude::*;

/// Компонент поиска с debounce и кнопкой очистки
///
/// `value` берётся из URL; локальный ввод уходит в `on_change`
/// только после паузы `delay_ms`.
#[component]
pub fn SearchInput(
    /// Текущее значение фильтра (для отображения)
    #[prop(into)]
    value: Signal<String>,
    /// Callback для обновления значения фильтра
    #[prop(into)]
    on_change: Callback<String>,
    /// Placeholder текст
    #[prop(optional, into)]
    placeholder: String,
    /// Пауза перед отправкой значения
    #[prop(optional, default = DEFAULT_DEBOUNCE_MS)]
    delay_ms: u32,
) -> impl IntoView {
    let placeholder = if placeholder.is_empty() {
        "Поиск...".to_string()
    } else {
        placeholder
    };

    // Локальное состояние для input (до debounce)
    let (input_value, set_input_value) = signal(value.get_untracked());

    // Внешнее изменение (сброс фильтров, навигация назад) перезаписывает поле
    Effect::new(move |_| {
        set_input_value.set(value.get());
    });

    let debounced = use_debounced(delay_ms, on_change);

    let clear_filter = move |_| {
        debounced.cancel();
        set_input_value.set(String::new());
        on_change.run(String::new());
    };

    view! {
        <div class="search-input">
            <input
                type="text"
                placeholder=placeholder
                class=move || {
                    if input_value.get().trim().is_empty() {
                        "search-input__field"
                    } else {
                        "search-input__field search-input__field--active"
                    }
                }
                prop:value=move || input_value.get()
                on:input=move |ev| {
                    let val = event_target_value(&ev);
                    set_input_value.set(val.clone());
                    debounced.call(val);
                }
            />
            <Show when=move || !input_value.get().is_empty()>
                <button class="search-input__clear" on:click=clear_filter title="Очистить">
                    {crate::shared::icons::icon("x")}
                </button>
            </Show>
        </div>
    }
}
