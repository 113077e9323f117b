use std::fmt;
use std::rc::Rc;

/// Cheap cloneable handle to an owner-supplied callback.
///
/// The controller receives the owner's mutation callbacks on every render and
/// fans them out to the per-highlight overlay props, so the handle has to be
/// cloneable without cloning the closure itself. Equality is handle identity,
/// which lets render output carrying callbacks still be compared.
pub struct Callback<T>(Rc<dyn Fn(T)>);

impl<T> Callback<T> {
    pub fn new(f: impl Fn(T) + 'static) -> Self {
        Self(Rc::new(f))
    }

    pub fn call(&self, value: T) {
        (self.0)(value)
    }
}

impl<T> Clone for Callback<T> {
    fn clone(&self) -> Self {
        Self(Rc::clone(&self.0))
    }
}

impl<T> PartialEq for Callback<T> {
    fn eq(&self, other: &Self) -> bool {
        Rc::ptr_eq(&self.0, &other.0)
    }
}

impl<T> fmt::Debug for Callback<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("Callback")
    }
}
