//! «Побеждает последний»: каждый новый билет делает все предыдущие неактуальными.
//!
//! Используется debounce'ом полей ввода и таблицей, чтобы отбрасывать
//! ответы запросов, на смену которым уже ушёл новый.

#[derive(Debug, Default, Clone)]
pub struct TicketGate {
    generation: u64,
}

impl TicketGate {
    /// Новый билет; все ранее выданные становятся неактуальными
    pub fn arm(&mut self) -> u64 {
        self.generation = self.generation.wrapping_add(1);
        self.generation
    }

    pub fn is_current(&self, ticket: u64) -> bool {
        self.generation == ticket
    }

    /// Отменяет ожидающий билет, не выдавая нового
    pub fn cancel(&mut self) {
        self.generation = self.generation.wrapping_add(1);
    }
}
