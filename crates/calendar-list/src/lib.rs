//! Windowing controller for a scrollable list of calendar months.
//!
//! The list covers a fixed range of months around an anchor date. Only the
//! months near the viewport are materialized; the rest are cheap text
//! placeholders. Drawing and scrolling are left to a host list reached through
//! [`ScrollableWindow`] and [`WindowItemProvider`].

mod axis;
mod calendar_list;
mod header;
mod host;
mod item_provider;
mod props;
mod row;
mod row_model;
mod scroll_coordinator;
mod spec;
mod update_gate;
mod visibility;

pub use axis::*;
pub use calendar_list::*;
pub use header::*;
pub use host::*;
pub use item_provider::*;
pub use props::*;
pub use row::*;
pub use row_model::*;
pub use scroll_coordinator::*;
pub use spec::*;
pub use update_gate::*;
pub use visibility::*;

pub use calendar_dates::{CalendarMonth, DateData, NaiveDate};

pub mod prelude {
    pub use crate::calendar_list::{CalendarList, RenderDecision};
    pub use crate::header::HeaderArrow;
    pub use crate::host::{LayoutEvent, ScrollableWindow};
    pub use crate::item_provider::WindowItemProvider;
    pub use crate::props::CalendarProps;
    pub use crate::row::Row;
    pub use crate::spec::CalendarListSpec;
    pub use calendar_dates::{CalendarMonth, DateData, NaiveDate};
}
