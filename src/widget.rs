//! Optional third-party widget global.
//!
//! An embedded script may install `twttr.widgets.load()` on the page's
//! global object, or may not. Every level is optional, so callers go through
//! [`Window::widgets`] or [`Window::load_widgets`] instead of assuming the
//! capability exists.
//!
//! ```
//! use teslavia_site::widget::Window;
//!
//! let window = Window::default();
//! assert!(!window.load_widgets());
//! ```

use std::fmt;
use std::sync::Arc;

/// The zero-argument `load` capability installed by the widget script.
pub trait WidgetLoader: Send + Sync {
    fn load(&self);
}

impl<F> WidgetLoader for F
where
    F: Fn() + Send + Sync,
{
    fn load(&self) {
        self()
    }
}

/// `twttr.widgets`
#[derive(Clone)]
pub struct Widgets {
    loader: Arc<dyn WidgetLoader>,
}

impl Widgets {
    pub fn new(loader: impl WidgetLoader + 'static) -> Self {
        Widgets {
            loader: Arc::new(loader),
        }
    }

    pub fn load(&self) {
        self.loader.load();
    }
}

impl fmt::Debug for Widgets {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Widgets").finish_non_exhaustive()
    }
}

/// `twttr`
#[derive(Debug, Clone, Default)]
pub struct Twttr {
    pub widgets: Option<Widgets>,
}

/// The global object, as far as the widget script is concerned.
#[derive(Debug, Clone, Default)]
pub struct Window {
    pub twttr: Option<Twttr>,
}

impl Window {
    /// A window where the script has installed a loader.
    pub fn with_loader(loader: impl WidgetLoader + 'static) -> Self {
        Window {
            twttr: Some(Twttr {
                widgets: Some(Widgets::new(loader)),
            }),
        }
    }

    /// `window.twttr?.widgets`
    pub fn widgets(&self) -> Option<&Widgets> {
        self.twttr.as_ref()?.widgets.as_ref()
    }

    /// Call `load()` if the whole chain is present. Returns whether it ran.
    pub fn load_widgets(&self) -> bool {
        match self.widgets() {
            Some(widgets) => {
                widgets.load();
                true
            }
            None => {
                tracing::trace!("widget script not installed; skipping load");
                false
            }
        }
    }
}
