//! Centralized icon definitions.
//!
//! Maps semantic icon names to the selected theme's icons; change
//! `ICON_THEME` to switch icon styles globally.

use icondata::Icon;

/// Icon theme selection.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[allow(dead_code)]
pub enum IconTheme {
    #[default]
    Bootstrap,
    Lucide,
}

/// Current icon theme used throughout the application.
pub const ICON_THEME: IconTheme = IconTheme::Bootstrap;

mod lucide {
    pub use icondata::{
        LuCheck as Check, LuChevronDown as CaretDown, LuChevronLeft as Back, LuCoffee as Cup,
        LuMapPin as Location, LuMoon as Moon, LuSun as Sun, LuX as Close,
    };
}

mod bootstrap {
    pub use icondata::{
        BsCaretDownFill as CaretDown, BsCheckLg as Check, BsChevronLeft as Back, BsCupHot as Cup,
        BsGeoAltFill as Location, BsMoonStarsFill as Moon, BsSun as Sun, BsXLg as Close,
    };
}

macro_rules! themed_icon {
    ($name:ident, $theme_name:ident) => {
        pub const $name: Icon = match ICON_THEME {
            IconTheme::Lucide => lucide::$theme_name,
            IconTheme::Bootstrap => bootstrap::$theme_name,
        };
    };
}

themed_icon!(BACK, Back);
themed_icon!(CARET_DOWN, CaretDown);
themed_icon!(CHECK, Check);
themed_icon!(CLOSE, Close);
themed_icon!(CUP, Cup);
themed_icon!(LOCATION, Location);
themed_icon!(MOON, Moon);
themed_icon!(SUN, Sun);
