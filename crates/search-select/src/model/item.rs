//! Item accessors.
//!
//! The state machine never inspects an item's shape directly. Instead it is
//! handed three accessors at construction: one for the identifier, one for the
//! display text that queries are matched against, and one for the image
//! reference a renderer draws next to the text.
//!
//! Statically typed items supply closures through [`Accessors::new`].
//! String-keyed records (`serde_json::Value` objects) get accessors built from
//! configured field names via [`Accessors::from_config`](crate::SearchSelectConfig).

use std::fmt;
use std::sync::Arc;

/// Type alias for an identifier accessor.
pub type IdAccessor<T, Id> = Arc<dyn Fn(&T) -> Option<Id> + Send + Sync>;

/// Type alias for a text accessor (display text or image reference).
pub type TextAccessor<T> = Arc<dyn for<'a> Fn(&'a T) -> Option<&'a str> + Send + Sync>;

/// Names the three addressable fields of an item.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum FieldRole {
    /// The identifier field; selection is tracked by identity.
    Id,
    /// The display-text field queries are matched against.
    Name,
    /// The image/reference field.
    Image,
}

impl fmt::Display for FieldRole {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Id => f.write_str("identifier"),
            Self::Name => f.write_str("name"),
            Self::Image => f.write_str("image"),
        }
    }
}

/// The accessors used to read an item's identifier, name and image.
///
/// Each accessor returns `None` when the item lacks the field. A missing
/// name never matches a query and a missing identifier never enters the
/// selection.
///
/// # Example
///
/// ```
/// use search_select::model::Accessors;
///
/// struct Person {
///     id: u32,
///     name: String,
///     avatar: Option<String>,
/// }
///
/// let accessors = Accessors::new(
///     |p: &Person| Some(p.id),
///     |p: &Person| Some(p.name.as_str()),
///     |p: &Person| p.avatar.as_deref(),
/// );
///
/// let ann = Person { id: 1, name: "Ann".into(), avatar: None };
/// assert_eq!(accessors.id_of(&ann), Some(1));
/// assert_eq!(accessors.name_of(&ann), Some("Ann"));
/// assert_eq!(accessors.image_of(&ann), None);
/// ```
pub struct Accessors<T, Id> {
    id_of: IdAccessor<T, Id>,
    name_of: TextAccessor<T>,
    image_of: TextAccessor<T>,
}

impl<T, Id> Clone for Accessors<T, Id> {
    fn clone(&self) -> Self {
        Self {
            id_of: self.id_of.clone(),
            name_of: self.name_of.clone(),
            image_of: self.image_of.clone(),
        }
    }
}

impl<T, Id> fmt::Debug for Accessors<T, Id> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Accessors").finish_non_exhaustive()
    }
}

impl<T, Id> Accessors<T, Id> {
    /// Creates accessors from three closures.
    pub fn new<I, N, M>(id_of: I, name_of: N, image_of: M) -> Self
    where
        I: Fn(&T) -> Option<Id> + Send + Sync + 'static,
        N: for<'a> Fn(&'a T) -> Option<&'a str> + Send + Sync + 'static,
        M: for<'a> Fn(&'a T) -> Option<&'a str> + Send + Sync + 'static,
    {
        Self {
            id_of: Arc::new(id_of),
            name_of: Arc::new(name_of),
            image_of: Arc::new(image_of),
        }
    }

    pub(crate) fn from_shared(
        id_of: IdAccessor<T, Id>,
        name_of: TextAccessor<T>,
        image_of: TextAccessor<T>,
    ) -> Self {
        Self {
            id_of,
            name_of,
            image_of,
        }
    }

    /// Returns the item's identifier.
    pub fn id_of(&self, item: &T) -> Option<Id> {
        (self.id_of)(item)
    }

    /// Returns the item's display text.
    pub fn name_of<'a>(&self, item: &'a T) -> Option<&'a str> {
        (self.name_of)(item)
    }

    /// Returns the item's image reference.
    pub fn image_of<'a>(&self, item: &'a T) -> Option<&'a str> {
        (self.image_of)(item)
    }

    /// Returns a shareable handle to the identifier accessor.
    pub fn id_accessor(&self) -> IdAccessor<T, Id> {
        self.id_of.clone()
    }

    /// Returns a shareable handle to the name accessor.
    pub fn name_accessor(&self) -> TextAccessor<T> {
        self.name_of.clone()
    }

    /// Returns a shareable handle to the image accessor.
    pub fn image_accessor(&self) -> TextAccessor<T> {
        self.image_of.clone()
    }
}
