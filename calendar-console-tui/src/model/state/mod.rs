//! 各页面与弹窗的状态模块

mod calendars;
mod detail;
mod events;
mod modal;

pub use calendars::CalendarsState;
pub use detail::{CalendarDetailState, EventDetailState, PreviousPage};
pub use events::EventsState;
pub use modal::{
    DATETIME_INPUT_FORMAT, EVENT_FORM_DATE_FIELDS, EVENT_FORM_FIELDS, EntityKind, Modal,
    ModalState, format_datetime_input, parse_datetime_input,
};
