//! Macros for declaring automaton state enums.

/// Generate a state enum and its [`State`](crate::core::State) implementation.
///
/// Each variant carries its canonical label and a description. The label is
/// also the variant's serialized form. An inherent `ALL` constant lists the
/// variants in declaration order.
///
/// # Example
///
/// ```
/// use form_automata::core::State;
/// use form_automata::state_enum;
///
/// state_enum! {
///     pub enum TurnstileState {
///         Locked("LOCKED", "Waiting for a coin"),
///         Open("OPEN", "One person may pass"),
///         Broken("BROKEN", "Out of order"),
///     }
///     trap: [Broken]
/// }
///
/// assert_eq!(TurnstileState::Open.name(), "OPEN");
/// assert!(TurnstileState::Broken.is_trap());
/// assert_eq!(TurnstileState::ALL.len(), 3);
/// ```
#[macro_export]
macro_rules! state_enum {
    (
        $(#[$meta:meta])*
        $vis:vis enum $name:ident {
            $(
                $(#[$variant_meta:meta])*
                $variant:ident ($label:literal, $description:literal)
            ),* $(,)?
        }

        $(trap: [$($trap:ident),* $(,)?])?
    ) => {
        $(#[$meta])*
        #[derive(Clone, Copy, PartialEq, Eq, Hash, Debug, serde::Serialize, serde::Deserialize)]
        $vis enum $name {
            $(
                $(#[$variant_meta])*
                #[serde(rename = $label)]
                $variant
            ),*
        }

        impl $name {
            /// Every state, in declaration order.
            pub const ALL: &'static [$name] = &[$($name::$variant),*];
        }

        impl $crate::core::State for $name {
            fn name(&self) -> &str {
                match self {
                    $(Self::$variant => $label),*
                }
            }

            #[allow(unreachable_patterns)]
            fn is_trap(&self) -> bool {
                match self {
                    $($(Self::$trap => true,)*)?
                    _ => false,
                }
            }

            fn description(&self) -> String {
                match self {
                    $(Self::$variant => $description.to_string()),*
                }
            }
        }
    };
}
