/// Actions dispatched by the counter buttons.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CounterAction {
    DecrTapped,
    IncrTapped,
}
