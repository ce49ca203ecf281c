//! Debounce на краю: вызовы копятся, пока идут чаще `delay_ms`,
//! и наружу уходит только последнее значение после паузы.
//!
//! Состояние списка само по себе синхронное; debounce нужен полям ввода,
//! чтобы каждое нажатие клавиши не превращалось в `replaceState` и запрос к API.

use gloo_timers::future::TimeoutFuture;
use leptos::prelude::*;

use crate::shared::ticket_gate::TicketGate;

pub const DEFAULT_DEBOUNCE_MS: u32 = 300;

/// Отложенный вызов callback; `Copy`, можно передавать в обработчики событий
pub struct Debounced<T: 'static> {
    gate: StoredValue<TicketGate>,
    delay_ms: u32,
    callback: Callback<T>,
}

impl<T: 'static> Clone for Debounced<T> {
    fn clone(&self) -> Self {
        *self
    }
}

impl<T: 'static> Copy for Debounced<T> {}

impl<T: Send + Sync + 'static> Debounced<T> {
    pub fn call(&self, value: T) {
        let mut ticket = 0;
        self.gate.update_value(|g| ticket = g.arm());

        let gate = self.gate;
        let callback = self.callback;
        let delay_ms = self.delay_ms;
        leptos::task::spawn_local(async move {
            TimeoutFuture::new(delay_ms).await;
            // Компонент мог быть размонтирован, пока шёл таймер
            let current = gate.try_with_value(|g| g.is_current(ticket)).unwrap_or(false);
            if current {
                callback.run(value);
            }
        });
    }

    /// Отменяет ожидающий вызов (например, перед немедленной очисткой поля)
    pub fn cancel(&self) {
        self.gate.update_value(|g| g.cancel());
    }
}

pub fn use_debounced<T>(delay_ms: u32, callback: Callback<T>) -> Debounced<T>
where
    T: Send + Sync + 'static,
{
    Debounced {
        gate: StoredValue::new(TicketGate::default()),
        delay_ms,
        callback,
    }
}
