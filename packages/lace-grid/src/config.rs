use std::sync::Arc;
use std::time::Duration;

use lace_traits::{
    metrics::{DummyMetricsProvider, MetricsProvider},
    render::{DummyRenderProvider, RenderProvider},
    resize::{DummyResizeSource, ResizeSource},
    timer::{DummyTimerProvider, TimerProvider},
};

use crate::error::{ConfigError, GridResult};

pub const DEFAULT_MIN_COLS: usize = 1;
pub const DEFAULT_WINDOW_PADDING: f32 = 50.0;
/// Height difference (px) between the tallest and shortest column below which balancing is skipped
pub const DEFAULT_BALANCE_THRESHOLD: f32 = 500.0;
pub const DEFAULT_RESIZE_DELAY: Duration = Duration::from_millis(250);
/// Upper bound on the number of columns a grid will build
pub const MAX_COLUMNS: usize = 512;

/// Which width the column count is derived from when the grid is centered
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ReferenceWidth {
    /// [`MetricsProvider::reference_width`], normally the viewport
    #[default]
    Viewport,
    /// The container's own measured width
    Container,
}

/// Options used when initializing a [`Grid`](crate::Grid)
///
/// `col_width`, `col_padding` and `selector` are required. Missing values are reported as
/// [`ConfigError`]s by [`GridConfig::validate`] and replaced by inert defaults.
#[derive(Debug, Clone, PartialEq)]
pub struct GridConfig {
    /// Width of a single column in px
    pub col_width: Option<f32>,
    /// Horizontal gap after each column in px
    pub col_padding: Option<f32>,
    /// Lower bound on the number of columns
    pub min_cols: usize,
    /// Width subtracted from the measured width before counting columns
    pub window_padding: f32,
    /// Identifies the items already inside the container
    pub selector: Option<String>,
    /// Pull existing items into the columns at init
    pub bootstrapped: bool,
    /// Size the container to exactly fit its columns
    pub centered: bool,
    pub reference_width: ReferenceWidth,
    pub balance_threshold: f32,
    /// Debounce window for resize events
    pub resize_delay: Duration,
    /// Run the balancer once after bootstrapping
    pub balance_on_init: bool,
}

impl Default for GridConfig {
    fn default() -> Self {
        Self {
            col_width: None,
            col_padding: None,
            min_cols: DEFAULT_MIN_COLS,
            window_padding: DEFAULT_WINDOW_PADDING,
            selector: None,
            bootstrapped: true,
            centered: false,
            reference_width: ReferenceWidth::default(),
            balance_threshold: DEFAULT_BALANCE_THRESHOLD,
            resize_delay: DEFAULT_RESIZE_DELAY,
            balance_on_init: true,
        }
    }
}

impl GridConfig {
    /// Config with the three required options filled in
    pub fn new(selector: impl Into<String>, col_width: f32, col_padding: f32) -> Self {
        Self {
            col_width: Some(col_width),
            col_padding: Some(col_padding),
            selector: Some(selector.into()),
            ..Default::default()
        }
    }

    pub fn with_min_cols(mut self, min_cols: usize) -> Self {
        self.min_cols = min_cols;
        self
    }

    pub fn with_window_padding(mut self, window_padding: f32) -> Self {
        self.window_padding = window_padding;
        self
    }

    pub fn with_bootstrapped(mut self, bootstrapped: bool) -> Self {
        self.bootstrapped = bootstrapped;
        self
    }

    pub fn with_centered(mut self, centered: bool) -> Self {
        self.centered = centered;
        self
    }

    pub fn with_reference_width(mut self, reference_width: ReferenceWidth) -> Self {
        self.reference_width = reference_width;
        self
    }

    pub fn with_balance_threshold(mut self, threshold: f32) -> Self {
        self.balance_threshold = threshold;
        self
    }

    pub fn with_resize_delay(mut self, delay: Duration) -> Self {
        self.resize_delay = delay;
        self
    }

    pub fn with_balance_on_init(mut self, balance_on_init: bool) -> Self {
        self.balance_on_init = balance_on_init;
        self
    }

    /// Resolve every option to a concrete value, collecting what was wrong along the way
    ///
    /// Never fails: each problem is replaced by a default that keeps the grid functional.
    /// A missing selector disables bootstrapping. A missing or unusable `col_width` or
    /// `col_padding` zeroes both lengths and turns centering off, which leaves the grid at
    /// `min_cols` columns whatever the container width.
    pub fn validate(&self) -> (ResolvedConfig, Vec<ConfigError>) {
        let mut errors = Vec::new();

        let selector = match self.selector.as_deref() {
            None => {
                errors.push(ConfigError::missing("selector"));
                String::new()
            }
            Some("") => {
                errors.push(ConfigError::EmptySelector);
                String::new()
            }
            Some(selector) => selector.to_owned(),
        };

        let col_width = required_length("col_width", self.col_width, false, &mut errors);
        let col_padding = required_length("col_padding", self.col_padding, true, &mut errors);
        // Columns cannot be sized from half a definition: both collapse so only `min_cols` fit
        let sized = col_width.is_some() && col_padding.is_some();
        let (col_width, col_padding) = match (col_width, col_padding) {
            (Some(col_width), Some(col_padding)) => (col_width, col_padding),
            _ => (0.0, 0.0),
        };
        let window_padding = optional_length(
            "window_padding",
            self.window_padding,
            DEFAULT_WINDOW_PADDING,
            &mut errors,
        );
        let balance_threshold = optional_length(
            "balance_threshold",
            self.balance_threshold,
            DEFAULT_BALANCE_THRESHOLD,
            &mut errors,
        );

        let min_cols = if (1..=MAX_COLUMNS).contains(&self.min_cols) {
            self.min_cols
        } else {
            errors.push(ConfigError::InvalidMinCols {
                value: self.min_cols,
            });
            self.min_cols.clamp(DEFAULT_MIN_COLS, MAX_COLUMNS)
        };

        let resolved = ResolvedConfig {
            col_width,
            col_padding,
            min_cols,
            window_padding,
            bootstrapped: self.bootstrapped && !selector.is_empty(),
            selector,
            centered: self.centered && sized,
            reference_width: self.reference_width,
            balance_threshold,
            resize_delay: self.resize_delay,
            balance_on_init: self.balance_on_init,
        };

        (resolved, errors)
    }

    /// Strict counterpart of [`GridConfig::validate`]: the first problem is an error
    pub fn resolve(&self) -> GridResult<ResolvedConfig> {
        let (resolved, errors) = self.validate();
        match errors.into_iter().next() {
            Some(error) => Err(error.into()),
            None => Ok(resolved),
        }
    }
}

fn is_valid_length(value: f32) -> bool {
    value.is_finite() && value >= 0.0
}

fn required_length(
    option: &'static str,
    value: Option<f32>,
    allow_zero: bool,
    errors: &mut Vec<ConfigError>,
) -> Option<f32> {
    match value {
        None => {
            errors.push(ConfigError::missing(option));
            None
        }
        Some(value) if !is_valid_length(value) || (value == 0.0 && !allow_zero) => {
            errors.push(ConfigError::invalid_length(option, value));
            None
        }
        Some(value) => Some(value),
    }
}

fn optional_length(
    option: &'static str,
    value: f32,
    default: f32,
    errors: &mut Vec<ConfigError>,
) -> f32 {
    if is_valid_length(value) {
        value
    } else {
        errors.push(ConfigError::invalid_length(option, value));
        default
    }
}

/// A [`GridConfig`] with every option resolved to a usable value
#[derive(Debug, Clone, PartialEq)]
pub struct ResolvedConfig {
    pub col_width: f32,
    pub col_padding: f32,
    pub min_cols: usize,
    pub window_padding: f32,
    pub selector: String,
    pub bootstrapped: bool,
    pub centered: bool,
    pub reference_width: ReferenceWidth,
    pub balance_threshold: f32,
    pub resize_delay: Duration,
    pub balance_on_init: bool,
}

impl ResolvedConfig {
    /// Width of `column_count` columns with the trailing padding removed
    pub fn centered_width(&self, column_count: usize) -> f32 {
        let per_column = self.col_width + self.col_padding;
        (column_count as f32 * per_column - self.col_padding).max(0.0)
    }
}

/// Capabilities a grid talks to. Unset providers fall back to the `Dummy*` implementations.
#[derive(Default, Clone)]
pub struct GridProviders {
    pub metrics: Option<Arc<dyn MetricsProvider>>,
    pub render: Option<Arc<dyn RenderProvider>>,
    pub resize: Option<Arc<dyn ResizeSource>>,
    pub timer: Option<Arc<dyn TimerProvider>>,
}

impl GridProviders {
    pub fn with_metrics(mut self, metrics: Arc<dyn MetricsProvider>) -> Self {
        self.metrics = Some(metrics);
        self
    }

    pub fn with_render(mut self, render: Arc<dyn RenderProvider>) -> Self {
        self.render = Some(render);
        self
    }

    pub fn with_resize(mut self, resize: Arc<dyn ResizeSource>) -> Self {
        self.resize = Some(resize);
        self
    }

    pub fn with_timer(mut self, timer: Arc<dyn TimerProvider>) -> Self {
        self.timer = Some(timer);
        self
    }

    pub(crate) fn resolve(self) -> Providers {
        Providers {
            metrics: self
                .metrics
                .unwrap_or_else(|| Arc::new(DummyMetricsProvider)),
            render: self.render.unwrap_or_else(|| Arc::new(DummyRenderProvider)),
            resize: self
                .resize
                .unwrap_or_else(|| Arc::new(DummyResizeSource::default())),
            timer: self
                .timer
                .unwrap_or_else(|| Arc::new(DummyTimerProvider::default())),
        }
    }
}

/// Providers after defaulting
pub(crate) struct Providers {
    pub metrics: Arc<dyn MetricsProvider>,
    pub render: Arc<dyn RenderProvider>,
    pub resize: Arc<dyn ResizeSource>,
    pub timer: Arc<dyn TimerProvider>,
}
