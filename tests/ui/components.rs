#[path = "components/dialog_component.rs"]
mod dialog_component;


#[path = "components/task_item_component.rs"]
mod task_item_component;
