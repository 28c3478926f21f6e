//! Callback-driven statement sources.

use crate::model::statement::Statement;
use std::convert::Infallible;
use std::ops::ControlFlow;

/// Producer that visits every statement of a graph once per call.
///
/// # Contract
/// - `visit` is called once per stored statement, in any order.
/// - Returning `ControlFlow::Break(())` stops the scan; the call then returns `Ok(())`.
/// - Returning from `for_each_statement` signals completion.
/// - A read failure aborts the scan and is returned as `Err`.
pub trait StatementSource {
    type Error;

    fn for_each_statement(
        &self,
        visit: &mut dyn FnMut(&Statement) -> ControlFlow<()>,
    ) -> Result<(), Self::Error>;
}

impl StatementSource for [Statement] {
    type Error = Infallible;

    fn for_each_statement(
        &self,
        visit: &mut dyn FnMut(&Statement) -> ControlFlow<()>,
    ) -> Result<(), Self::Error> {
        for statement in self {
            if visit(statement).is_break() {
                break;
            }
        }
        Ok(())
    }
}

impl StatementSource for Vec<Statement> {
    type Error = Infallible;

    fn for_each_statement(
        &self,
        visit: &mut dyn FnMut(&Statement) -> ControlFlow<()>,
    ) -> Result<(), Self::Error> {
        self.as_slice().for_each_statement(visit)
    }
}
