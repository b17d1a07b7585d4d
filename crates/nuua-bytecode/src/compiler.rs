//! Compiler state: the active-region selector and the current source line,
//! threaded through every emit call as the walker descends the AST.

use nuua_core::ast::Stmt;
use nuua_core::error::CompileResult;
use nuua_core::opcode::Opcode;
use nuua_core::program::{Program, RegionId};
use nuua_core::region::MemoryRegion;

use crate::emit;

pub struct Compiler {
    program: Program,
    active_region: RegionId,
    current_line: u32,
}

impl Default for Compiler {
    fn default() -> Self {
        Self::new()
    }
}

impl Compiler {
    pub fn new() -> Self {
        Self {
            program: Program::new(),
            active_region: RegionId::Program,
            current_line: 0,
        }
    }

    /// Emits every top-level statement into the `program` region and
    /// appends the terminating `EXIT`.
    pub fn compile(&mut self, statements: &[Stmt]) -> CompileResult<()> {
        for statement in statements {
            emit::stmt::emit_statement(self, statement)?;
        }
        self.region_mut().emit_op(Opcode::Exit, self.current_line);
        Ok(())
    }

    pub fn into_program(self) -> Program {
        self.program
    }

    pub(crate) fn current_line(&self) -> u32 {
        self.current_line
    }

    pub(crate) fn set_current_line(&mut self, line: u32) {
        self.current_line = line;
    }

    pub(crate) fn active_region(&self) -> RegionId {
        self.active_region
    }

    pub(crate) fn region(&self) -> &MemoryRegion {
        self.program.region(self.active_region)
    }

    pub(crate) fn region_mut(&mut self) -> &mut MemoryRegion {
        self.program.region_mut(self.active_region)
    }
}

/// Switches the active region for as long as the guard is alive, restoring
/// the previous region when it drops. A function literal is the only
/// construct that retargets emission away from the enclosing region, and it
/// can fail partway through its body (an inner `if`/`else` is rejected, a
/// back-patch index can be out of range); using `Drop` rather than a plain
/// save/restore pair means the restore still runs when `?` unwinds out of
/// the body early, so a failed compile never leaves the compiler pointed at
/// `functions` while the caller goes on trying to emit into `program`.
pub(crate) struct RegionGuard<'c> {
    compiler: &'c mut Compiler,
    previous: RegionId,
}

impl<'c> RegionGuard<'c> {
    pub(crate) fn enter(compiler: &'c mut Compiler, region: RegionId) -> Self {
        let previous = std::mem::replace(&mut compiler.active_region, region);
        Self { compiler, previous }
    }
}

impl std::ops::Deref for RegionGuard<'_> {
    type Target = Compiler;

    fn deref(&self) -> &Compiler {
        self.compiler
    }
}

impl std::ops::DerefMut for RegionGuard<'_> {
    fn deref_mut(&mut self) -> &mut Compiler {
        self.compiler
    }
}

impl Drop for RegionGuard<'_> {
    fn drop(&mut self) {
        self.compiler.active_region = self.previous;
    }
}
