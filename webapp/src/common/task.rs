use std::{cell::Cell, rc::Rc, time::Duration};

use dioxus::prelude::*;

// a slot holding at most one spawned loop
//
// replacing the task cancels the previous one, and the hook that creates the slot cancels
// whatever is left in it when the owning component unmounts, so a timer can never fire into
// a torn-down section
#[derive(Clone, Default)]
pub struct TaskSlot(Rc<Cell<Option<Task>>>);

impl TaskSlot {
    pub fn replace(&self, task: Task) {
        if let Some(old) = self.0.replace(Some(task)) {
            old.cancel();
        }
    }

    pub fn cancel(&self) {
        if let Some(task) = self.0.take() {
            task.cancel();
        }
    }
}

pub fn use_task_slot() -> TaskSlot {
    let slot = use_hook(TaskSlot::default);

    use_drop({
        let slot = slot.clone();
        move || slot.cancel()
    });

    slot
}

// gloo timers take u32 milliseconds
pub fn timeout_ms(duration: Duration) -> u32 {
    duration.as_millis().try_into().unwrap_or(u32::MAX)
}
