pub mod binding;
pub mod error;
pub mod interaction;
pub mod resolve;
pub mod segments;
pub mod tag;
pub mod theme;
pub mod widgets;

pub use binding::Binding;
pub use error::{LookupMiss, PickerError};
pub use interaction::InteractionState;
pub use resolve::{lookup_value, resolve_selected_index, resolve_value_for_index, ResolutionMode};
pub use segments::{Segment, Segments, MIN_SEGMENTS};
pub use tag::{extract_tag, Taggable};
pub use theme::{CheckboxStyle, PickerStyle, StateOpacity, SymbolButtonStyle, Theme};
pub use widgets::{Checkbox, EventResult, SegmentedPicker, SymbolButton, Widget, WidgetEvents};

pub mod prelude {
    pub use crate::binding::Binding;
    pub use crate::error::PickerError;
    pub use crate::resolve::ResolutionMode;
    pub use crate::segments;
    pub use crate::segments::{Segment, Segments};
    pub use crate::tag::Taggable;
    pub use crate::theme::Theme;
    pub use crate::widgets::{
        Checkbox, EventResult, SegmentedPicker, SymbolButton, Widget, WidgetEvents,
    };

    pub use tbdom::{Orientation, Point, PointerEvent, Scene, Size};
}
