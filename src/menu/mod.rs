//! Admin action menus.
//!
//! - `item`: `Menu` and `MenuItem`, the ordered rendered fragments
//! - `assembler`: one append operation per kind of menu item
//! - `script`: generated client code and script-safe JSON encoding

mod assembler;
mod item;
pub mod script;

pub use assembler::{
    MenuAssembler, MenuError, DEFAULT_LINK_TARGET, DEFAULT_PAGE_SIZES, TOGGLE_ALL_ICON,
    TOGGLE_ALL_LABEL,
};
pub use item::{Menu, MenuItem};
