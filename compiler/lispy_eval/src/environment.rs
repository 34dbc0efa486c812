//! Chained scope frames.
//!
//! A [`Scope`] is one frame of bindings. An [`Environment`] is a shared
//! handle to a frame; frames link outward to their parent through another
//! handle, and the chain ends at the root frame holding the builtins and
//! every `def` binding.

use indexmap::IndexMap;
use rustc_hash::FxBuildHasher;
use std::cell::RefCell;
use std::fmt;
use std::ops::Deref;
use std::rc::Rc;

use crate::errors::unbound_symbol;
use crate::value::Value;

/// Single-threaded shared ownership with interior mutability.
///
/// All frame allocations go through [`LocalScope::new`]. Evaluation is
/// single-threaded, so this is `Rc`, not `Arc`.
#[repr(transparent)]
pub struct LocalScope<T>(Rc<RefCell<T>>);

impl<T> LocalScope<T> {
    #[inline]
    pub fn new(value: T) -> Self {
        LocalScope(Rc::new(RefCell::new(value)))
    }

    /// Whether two handles point at the same frame.
    #[inline]
    pub fn ptr_eq(&self, other: &Self) -> bool {
        Rc::ptr_eq(&self.0, &other.0)
    }
}

impl<T> Clone for LocalScope<T> {
    #[inline]
    fn clone(&self) -> Self {
        LocalScope(Rc::clone(&self.0))
    }
}

impl<T> Deref for LocalScope<T> {
    type Target = RefCell<T>;

    #[inline]
    fn deref(&self) -> &Self::Target {
        &self.0
    }
}

/// One frame: names mapped to owned values, plus the enclosing frame.
///
/// Bindings keep the order they were first made in. Rebinding a name
/// replaces its value in place.
///
/// `Clone` copies every binding deeply. The parent link is a handle and is
/// shared, never copied.
#[derive(Clone)]
pub struct Scope {
    bindings: IndexMap<String, Value, FxBuildHasher>,
    parent: Option<Environment>,
}

impl Scope {
    /// An empty frame with no parent.
    pub fn new() -> Self {
        Scope {
            bindings: IndexMap::default(),
            parent: None,
        }
    }

    /// Bound value for `name` in this frame only.
    #[inline]
    pub fn get_local(&self, name: &str) -> Option<&Value> {
        self.bindings.get(name)
    }

    /// Bind or rebind `name` in this frame.
    #[inline]
    pub fn put(&mut self, name: impl Into<String>, value: Value) {
        self.bindings.insert(name.into(), value);
    }

    pub fn len(&self) -> usize {
        self.bindings.len()
    }

    pub fn is_empty(&self) -> bool {
        self.bindings.is_empty()
    }

    fn lookup(&self, name: &str) -> Option<Value> {
        if let Some(value) = self.bindings.get(name) {
            return Some(value.clone());
        }
        self.parent.as_ref().and_then(|parent| parent.lookup(name))
    }
}

impl Default for Scope {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Debug for Scope {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let names: Vec<&str> = self.bindings.keys().map(String::as_str).collect();
        f.debug_struct("Scope")
            .field("bindings", &names)
            .field("has_parent", &self.parent.is_some())
            .finish()
    }
}

/// Handle to a frame and, through it, the whole chain up to the root.
///
/// Cloning the handle shares the frame.
#[derive(Clone)]
pub struct Environment(LocalScope<Scope>);

impl Environment {
    /// A fresh root frame.
    pub fn new() -> Self {
        Environment(LocalScope::new(Scope::new()))
    }

    /// Install `scope` as a frame whose parent is `parent`.
    ///
    /// Any parent `scope` already had is replaced.
    pub fn with_parent(mut scope: Scope, parent: &Environment) -> Self {
        scope.parent = Some(parent.clone());
        Environment(LocalScope::new(scope))
    }

    /// Resolve `name`, innermost frame first.
    ///
    /// Returns an `Unbound symbol` error value when no frame binds it.
    pub fn get(&self, name: &str) -> Value {
        self.lookup(name)
            .unwrap_or_else(|| Value::Error(unbound_symbol(name)))
    }

    fn lookup(&self, name: &str) -> Option<Value> {
        self.0.borrow().lookup(name)
    }

    /// Bind `name` in this frame, replacing any local binding.
    pub fn put(&self, name: impl Into<String>, value: Value) {
        self.0.borrow_mut().put(name, value);
    }

    /// Bind `name` in the root frame, whatever the current depth.
    pub fn define_global(&self, name: impl Into<String>, value: Value) {
        self.root().put(name, value);
    }

    /// The frame at the end of the parent chain.
    pub fn root(&self) -> Environment {
        let mut current = self.clone();
        loop {
            let parent = current.0.borrow().parent.clone();
            match parent {
                Some(parent) => current = parent,
                None => return current,
            }
        }
    }

    /// Whether this frame has no parent.
    pub fn is_root(&self) -> bool {
        self.0.borrow().parent.is_none()
    }

    /// Deep copy of this frame's bindings, sharing the parent link.
    pub fn copy(&self) -> Environment {
        Environment(LocalScope::new(self.0.borrow().clone()))
    }

    /// Whether both handles refer to the same frame.
    pub fn same_frame(&self, other: &Environment) -> bool {
        self.0.ptr_eq(&other.0)
    }

    /// Run `f` against this frame's bindings.
    pub fn with_scope<R>(&self, f: impl FnOnce(&Scope) -> R) -> R {
        f(&self.0.borrow())
    }
}

impl Default for Environment {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Debug for Environment {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_tuple("Environment").field(&*self.0.borrow()).finish()
    }
}
