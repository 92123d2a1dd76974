//! Centralized icon definitions.
//!
//! Icon theme is configured in `config.rs` via `ICON_THEME`.
//! This module maps semantic icon names to the selected theme's icons.

use icondata::Icon;

use crate::config::IconTheme;

// =============================================================================
// Theme Imports
// =============================================================================

mod lucide {
    pub use icondata::{
        LuBookOpen as FilePdf, LuChevronLeft as ChevronLeft, LuChevronRight as ChevronRight,
        LuFile as File, LuFileText as FileText, LuFilm as FileVideo, LuFolder as Folder,
        LuHardDrive as Drive, LuHouse as Home, LuImage as FileImage, LuInfo as Warning,
        LuMusic as FileAudio, LuPresentation as FileOffice, LuRefreshCw as Refresh,
        LuSearch as Search, LuX as Close,
    };
}

mod bootstrap {
    pub use icondata::{
        BsArrowClockwise as Refresh, BsChevronLeft as ChevronLeft,
        BsChevronRight as ChevronRight, BsExclamationTriangle as Warning, BsFileEarmark as File,
        BsFileEarmarkImage as FileImage, BsFileEarmarkMusic as FileAudio,
        BsFileEarmarkPdf as FilePdf, BsFileEarmarkPlay as FileVideo,
        BsFileEarmarkText as FileText, BsFileEarmarkWord as FileOffice, BsFolderFill as Folder,
        BsHdd as Drive, BsHouseFill as Home, BsSearch as Search, BsXLg as Close,
    };
}

// =============================================================================
// Icon Constants (selected based on theme)
// =============================================================================

macro_rules! themed_icon {
    ($name:ident, $theme_name:ident) => {
        pub const $name: Icon = match crate::config::ICON_THEME {
            IconTheme::Lucide => lucide::$theme_name,
            IconTheme::Bootstrap => bootstrap::$theme_name,
        };
    };
}

themed_icon!(CHEVRON_LEFT, ChevronLeft);
themed_icon!(CHEVRON_RIGHT, ChevronRight);
themed_icon!(HOME, Home);
themed_icon!(DRIVE, Drive);
themed_icon!(FOLDER, Folder);
themed_icon!(FILE, File);
themed_icon!(FILE_TEXT, FileText);
themed_icon!(FILE_PDF, FilePdf);
themed_icon!(FILE_IMAGE, FileImage);
themed_icon!(FILE_VIDEO, FileVideo);
themed_icon!(FILE_AUDIO, FileAudio);
themed_icon!(FILE_OFFICE, FileOffice);
themed_icon!(SEARCH, Search);
themed_icon!(REFRESH, Refresh);
themed_icon!(WARNING, Warning);
themed_icon!(CLOSE, Close);
