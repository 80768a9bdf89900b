//! The "defined" predicate: present values versus absent or null ones

use std::ptr::NonNull;

/// Values that may be absent (`None`) or null (a null raw pointer)
pub trait MaybeDefined {
    /// Returns `true` if the value is neither absent nor null
    fn is_defined(&self) -> bool;
}

impl<T> MaybeDefined for Option<T> {
    fn is_defined(&self) -> bool {
        self.is_some()
    }
}

impl<T: ?Sized> MaybeDefined for *const T {
    fn is_defined(&self) -> bool {
        !self.is_null()
    }
}

impl<T: ?Sized> MaybeDefined for *mut T {
    fn is_defined(&self) -> bool {
        !self.is_null()
    }
}

impl<T: ?Sized> MaybeDefined for NonNull<T> {
    fn is_defined(&self) -> bool {
        true
    }
}

impl<T: MaybeDefined + ?Sized> MaybeDefined for &T {
    fn is_defined(&self) -> bool {
        (**self).is_defined()
    }
}

/// Given a value, return `true` if it is neither absent nor null
///
/// # Example
/// ```
/// use typed_action_core::is_defined;
///
/// assert!(is_defined(&Some(0)));
/// assert!(!is_defined(&None::<u8>));
/// assert!(!is_defined(&std::ptr::null::<u8>()));
/// ```
pub fn is_defined<T: MaybeDefined + ?Sized>(value: &T) -> bool {
    value.is_defined()
}
