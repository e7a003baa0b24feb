use thiserror::Error;

/// Rejection reasons for a [`crate::WindowOptions`] value.
///
/// Zero heights are contract violations rather than degenerate inputs: a zero `item_height`
/// would divide by zero and a zero `container_height` makes the visible count meaningless.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Error)]
pub enum OptionsError {
    #[error("item_height must be greater than zero")]
    ZeroItemHeight,
    #[error("container_height must be greater than zero")]
    ZeroContainerHeight,
}
