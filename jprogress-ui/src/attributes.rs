//! # Style Attributes
//!
//! Hosts describe a view's appearance with a bag of named style attributes
//! (usually parsed from a layout resource). A view obtains a handle to the
//! resolved values, reads what it needs, and releases the handle.
//!
//! The handle is wrapped in [`TypedAttributes`], a guard that releases it on
//! drop so every exit path (including early returns through `?`) gives the
//! handle back to the host.
//!
//! ```
//! use jprogress_ui::{AttrValue, AttributeSet, Color, TypedAttributes};
//!
//! let set = AttributeSet::new()
//!     .with("progress_color", AttrValue::Color(Color::RED))
//!     .with("progress_value", AttrValue::Integer(40));
//!
//! {
//!     let attrs = TypedAttributes::obtain(&set)?;
//!     assert_eq!(attrs.color("progress_color", Color::GREEN)?, Color::RED);
//!     assert_eq!(attrs.integer("progress_value_max", 100)?, 100);
//!     assert_eq!(set.open_handles(), 1);
//! }
//! assert_eq!(set.open_handles(), 0);
//! # Ok::<(), jprogress_ui::AttributeError>(())
//! ```

use std::{cell::Cell, collections::HashMap};

use thiserror::Error;

use crate::Color;

/// A resolved attribute value.
#[derive(Debug, Clone, PartialEq)]
pub enum AttrValue {
    /// A color.
    Color(Color),
    /// A dimension already resolved to pixels.
    Dimension(f32),
    /// An integer, also used for enumerations.
    Integer(i32),
    /// A flag.
    Boolean(bool),
    /// A literal string.
    String(String),
}

impl AttrValue {
    fn kind(&self) -> &'static str {
        match self {
            AttrValue::Color(_) => "color",
            AttrValue::Dimension(_) => "dimension",
            AttrValue::Integer(_) => "integer",
            AttrValue::Boolean(_) => "boolean",
            AttrValue::String(_) => "string",
        }
    }
}

/// Errors raised while reading style attributes.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum AttributeError {
    /// The attribute exists but holds a value of another type.
    #[error("attribute `{key}` expected a {expected} value, found {found}")]
    TypeMismatch {
        /// Attribute name.
        key: String,
        /// Type the reader asked for.
        expected: &'static str,
        /// Type actually stored.
        found: &'static str,
    },
    /// The handle was read after being released.
    #[error("attribute handle was read after it was recycled")]
    Recycled,
    /// The host could not resolve attributes at all.
    #[error("attribute source unavailable: {0}")]
    Unavailable(String),
}

/// A host handle to resolved style attributes.
pub trait StyledAttributes {
    /// Looks up one attribute. `Ok(None)` means the attribute is absent.
    fn get(&self, key: &str) -> Result<Option<AttrValue>, AttributeError>;

    /// Returns the handle to the host. Called exactly once by
    /// [`TypedAttributes`].
    fn recycle(&mut self);
}

/// Something a view can resolve style attributes from.
pub trait AttributeSource {
    /// Acquires a handle. Callers should go through
    /// [`TypedAttributes::obtain`] so the handle is always released.
    fn obtain_styled_attributes(&self) -> Result<Box<dyn StyledAttributes + '_>, AttributeError>;
}

/// Scoped, typed access to a [`StyledAttributes`] handle.
///
/// Every getter takes the default to return when the attribute is absent.
/// A present attribute of the wrong type is an error.
pub struct TypedAttributes<'a> {
    handle: Box<dyn StyledAttributes + 'a>,
    recycled: bool,
}

impl<'a> TypedAttributes<'a> {
    /// Acquires a handle from `source`.
    pub fn obtain<S: AttributeSource + ?Sized>(source: &'a S) -> Result<Self, AttributeError> {
        let handle = source.obtain_styled_attributes()?;
        Ok(Self {
            handle,
            recycled: false,
        })
    }

    fn mismatch(key: &str, expected: &'static str, found: &AttrValue) -> AttributeError {
        AttributeError::TypeMismatch {
            key: key.to_owned(),
            expected,
            found: found.kind(),
        }
    }

    /// Reads a color. Integers are accepted as packed `0xAARRGGBB`.
    pub fn color(&self, key: &str, default: Color) -> Result<Color, AttributeError> {
        match self.handle.get(key)? {
            None => Ok(default),
            Some(AttrValue::Color(color)) => Ok(color),
            Some(AttrValue::Integer(argb)) => Ok(Color::from_argb_u32(argb as u32)),
            Some(other) => Err(Self::mismatch(key, "color", &other)),
        }
    }

    /// Reads a pixel dimension.
    pub fn dimension(&self, key: &str, default: f32) -> Result<f32, AttributeError> {
        match self.handle.get(key)? {
            None => Ok(default),
            Some(AttrValue::Dimension(px)) => Ok(px),
            Some(other) => Err(Self::mismatch(key, "dimension", &other)),
        }
    }

    /// Reads an integer.
    pub fn integer(&self, key: &str, default: i32) -> Result<i32, AttributeError> {
        match self.handle.get(key)? {
            None => Ok(default),
            Some(AttrValue::Integer(value)) => Ok(value),
            Some(other) => Err(Self::mismatch(key, "integer", &other)),
        }
    }

    /// Reads a flag.
    pub fn boolean(&self, key: &str, default: bool) -> Result<bool, AttributeError> {
        match self.handle.get(key)? {
            None => Ok(default),
            Some(AttrValue::Boolean(value)) => Ok(value),
            Some(other) => Err(Self::mismatch(key, "boolean", &other)),
        }
    }

    /// Reads a string, `None` when absent.
    pub fn string(&self, key: &str) -> Result<Option<String>, AttributeError> {
        match self.handle.get(key)? {
            None => Ok(None),
            Some(AttrValue::String(value)) => Ok(Some(value)),
            Some(other) => Err(Self::mismatch(key, "string", &other)),
        }
    }

    /// Releases the handle now instead of at drop.
    pub fn recycle(mut self) {
        self.release();
    }

    fn release(&mut self) {
        if !self.recycled {
            self.recycled = true;
            self.handle.recycle();
        }
    }
}

impl Drop for TypedAttributes<'_> {
    fn drop(&mut self) {
        self.release();
    }
}

/// An in-memory [`AttributeSource`].
///
/// Useful for hosts that build views from code, and in tests. It counts
/// outstanding handles so callers can check that every handle was released.
#[derive(Debug, Default)]
pub struct AttributeSet {
    values: HashMap<String, AttrValue>,
    open_handles: Cell<usize>,
}

impl AttributeSet {
    /// An empty set.
    pub fn new() -> Self {
        Self::default()
    }

    /// Adds or replaces one attribute.
    pub fn with(mut self, key: impl Into<String>, value: AttrValue) -> Self {
        self.values.insert(key.into(), value);
        self
    }

    /// Number of handles obtained and not yet recycled.
    pub fn open_handles(&self) -> usize {
        self.open_handles.get()
    }
}

struct AttributeSetHandle<'a> {
    set: &'a AttributeSet,
    recycled: bool,
}

impl StyledAttributes for AttributeSetHandle<'_> {
    fn get(&self, key: &str) -> Result<Option<AttrValue>, AttributeError> {
        if self.recycled {
            return Err(AttributeError::Recycled);
        }
        Ok(self.set.values.get(key).cloned())
    }

    fn recycle(&mut self) {
        if !self.recycled {
            self.recycled = true;
            self.set.open_handles.set(self.set.open_handles.get() - 1);
        }
    }
}

impl AttributeSource for AttributeSet {
    fn obtain_styled_attributes(&self) -> Result<Box<dyn StyledAttributes + '_>, AttributeError> {
        self.open_handles.set(self.open_handles.get() + 1);
        Ok(Box::new(AttributeSetHandle {
            set: self,
            recycled: false,
        }))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn read_all(attrs: &TypedAttributes<'_>) -> Result<(i32, f32), AttributeError> {
        let value = attrs.integer("value", 0)?;
        let width = attrs.dimension("width", 1.0)?;
        Ok((value, width))
    }

    #[test]
    fn absent_attributes_return_defaults() {
        let set = AttributeSet::new();
        let attrs = TypedAttributes::obtain(&set).expect("obtain");
        assert_eq!(attrs.color("c", Color::BLUE), Ok(Color::BLUE));
        assert_eq!(attrs.dimension("d", 3.5), Ok(3.5));
        assert_eq!(attrs.boolean("b", true), Ok(true));
        assert_eq!(attrs.string("s"), Ok(None));
    }

    #[test]
    fn integer_colors_are_argb() {
        let set = AttributeSet::new().with("c", AttrValue::Integer(0xFFFF0000_u32 as i32));
        let attrs = TypedAttributes::obtain(&set).expect("obtain");
        assert_eq!(attrs.color("c", Color::BLUE), Ok(Color::RED));
    }

    #[test]
    fn type_mismatch_is_reported() {
        let set = AttributeSet::new().with("value", AttrValue::String("ten".into()));
        let attrs = TypedAttributes::obtain(&set).expect("obtain");
        let err = read_all(&attrs).expect_err("mismatch");
        assert_eq!(
            err,
            AttributeError::TypeMismatch {
                key: "value".into(),
                expected: "integer",
                found: "string",
            }
        );
    }

    #[test]
    fn handle_released_on_error_path() {
        let set = AttributeSet::new().with("width", AttrValue::Boolean(false));
        {
            let attrs = TypedAttributes::obtain(&set).expect("obtain");
            assert_eq!(set.open_handles(), 1);
            assert!(read_all(&attrs).is_err());
        }
        assert_eq!(set.open_handles(), 0);
    }

    #[test]
    fn explicit_recycle_releases_once() {
        let set = AttributeSet::new();
        let attrs = TypedAttributes::obtain(&set).expect("obtain");
        attrs.recycle();
        assert_eq!(set.open_handles(), 0);
    }
}
