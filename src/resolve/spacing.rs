//! Per-side padding and margin, per breakpoint.
//!
//! Reads fall back from the breakpoint override to the desktop base to zero.
//! Writes for desktop go to the base; writes for tablet or mobile go to that
//! breakpoint's override only.

use serde::{Deserialize, Serialize};

use crate::model::{Breakpoint, Element, SideOverrides};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SpacingProperty {
    Padding,
    Margin,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Side {
    Top,
    Right,
    Bottom,
    Left,
}

impl Side {
    pub const ALL: [Side; 4] = [Side::Top, Side::Right, Side::Bottom, Side::Left];
}

/// Resolved value per side.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct Sides {
    pub top: f64,
    pub right: f64,
    pub bottom: f64,
    pub left: f64,
}

impl Sides {
    pub fn get(&self, side: Side) -> f64 {
        match side {
            Side::Top => self.top,
            Side::Right => self.right,
            Side::Bottom => self.bottom,
            Side::Left => self.left,
        }
    }
}

fn side_value(sides: &SideOverrides, side: Side) -> Option<f64> {
    match side {
        Side::Top => sides.top,
        Side::Right => sides.right,
        Side::Bottom => sides.bottom,
        Side::Left => sides.left,
    }
}

fn side_slot(sides: &mut SideOverrides, side: Side) -> &mut Option<f64> {
    match side {
        Side::Top => &mut sides.top,
        Side::Right => &mut sides.right,
        Side::Bottom => &mut sides.bottom,
        Side::Left => &mut sides.left,
    }
}

fn property_of(props: &crate::model::BoxProps, property: SpacingProperty) -> &SideOverrides {
    match property {
        SpacingProperty::Padding => &props.padding,
        SpacingProperty::Margin => &props.margin,
    }
}

fn property_of_mut(
    props: &mut crate::model::BoxProps,
    property: SpacingProperty,
) -> &mut SideOverrides {
    match property {
        SpacingProperty::Padding => &mut props.padding,
        SpacingProperty::Margin => &mut props.margin,
    }
}

/// Resolve one side.
pub fn resolve_side(
    element: &Element,
    breakpoint: Breakpoint,
    property: SpacingProperty,
    side: Side,
) -> f64 {
    element
        .override_for(breakpoint)
        .and_then(|o| side_value(property_of(&o.content, property), side))
        .or_else(|| side_value(property_of(element.content.props(), property), side))
        .unwrap_or(0.0)
}

/// Resolve all four sides of `property` at `breakpoint`.
pub fn resolve_spacing(element: &Element, breakpoint: Breakpoint, property: SpacingProperty) -> Sides {
    Sides {
        top: resolve_side(element, breakpoint, property, Side::Top),
        right: resolve_side(element, breakpoint, property, Side::Right),
        bottom: resolve_side(element, breakpoint, property, Side::Bottom),
        left: resolve_side(element, breakpoint, property, Side::Left),
    }
}

/// Write a side (or all four, when `linked`) for one breakpoint.
///
/// The caller clamps `value`; this only routes it to the right slot.
pub fn write_spacing(
    element: &mut Element,
    breakpoint: Breakpoint,
    property: SpacingProperty,
    side: Side,
    value: f64,
    linked: bool,
) {
    let target = match breakpoint {
        Breakpoint::Desktop => property_of_mut(element.content.props_mut(), property),
        bp => property_of_mut(&mut element.responsive.entry(bp).or_default().content, property),
    };
    if linked {
        for s in Side::ALL {
            *side_slot(target, s) = Some(value);
        }
    } else {
        *side_slot(target, side) = Some(value);
    }
}

/// Link toggles for the spacing editor. Padding and margin link independently.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct SpacingLinks {
    pub padding: bool,
    pub margin: bool,
}

impl SpacingLinks {
    pub fn is_linked(&self, property: SpacingProperty) -> bool {
        match property {
            SpacingProperty::Padding => self.padding,
            SpacingProperty::Margin => self.margin,
        }
    }

    /// Flip the link for `property` and return the new state.
    pub fn toggle(&mut self, property: SpacingProperty) -> bool {
        let slot = match property {
            SpacingProperty::Padding => &mut self.padding,
            SpacingProperty::Margin => &mut self.margin,
        };
        *slot = !*slot;
        *slot
    }
}
