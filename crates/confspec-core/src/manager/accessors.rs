//! Typed field-style access to a manager.
//!
//! [`config_accessors!`](crate::config_accessors) generates a struct that
//! borrows a [`Manager`](crate::Manager) and exposes one getter and one
//! `set_` method per key:
//!
//! ```
//! use confspec_core::{ConfigOption, IntegerOption, Manager, config_accessors};
//!
//! config_accessors! {
//!     pub struct Person {
//!         age: i64,
//!     }
//! }
//!
//! let option = ConfigOption::builder("age", IntegerOption::new(), 18).build().unwrap();
//! let mut manager = Manager::builder([option]).autoload(false).build().unwrap();
//! let mut person = Person::new(&mut manager);
//! person.set_age(42).unwrap();
//! assert_eq!(person.age().unwrap(), 42);
//! ```
//!
//! Keys cannot be removed through the generated struct.

/// Generate a typed accessor struct over a [`Manager`](crate::Manager).
///
/// Getters return `Result<T>` through [`Manager::get_as`](crate::Manager::get_as);
/// setters go through [`Manager::set`](crate::Manager::set) and return
/// whether the value changed.
#[macro_export]
macro_rules! config_accessors {
    (
        $(#[$meta:meta])*
        $vis:vis struct $name:ident {
            $($key:ident : $ty:ty),* $(,)?
        }
    ) => {
        $crate::__private::paste::paste! {
            $(#[$meta])*
            $vis struct $name<'a> {
                manager: &'a mut $crate::Manager,
            }

            #[allow(dead_code)]
            impl<'a> $name<'a> {
                pub fn new(manager: &'a mut $crate::Manager) -> Self {
                    Self { manager }
                }

                pub fn manager(&self) -> &$crate::Manager {
                    self.manager
                }

                $(
                    pub fn $key(&self) -> $crate::Result<$ty> {
                        self.manager.get_as::<$ty>(stringify!($key))
                    }

                    pub fn [<set_ $key>](
                        &mut self,
                        value: impl Into<$crate::Value>,
                    ) -> $crate::Result<bool> {
                        self.manager.set(stringify!($key), value)
                    }
                )*
            }
        }
    };
}
