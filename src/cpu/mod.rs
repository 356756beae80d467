/*!
Intel 8080 CPU core (§4).

Submodules split the same way the instruction set itself splits: register
and flag storage (`regs`, `flags`), the owning `state` struct, reusable
building blocks (`primitives`, `fetch`), opcode metadata (`table`), async
interrupt injection (`interrupt`), and the opcode-family dispatchers
(`dispatch`).
*/

mod dispatch;
mod fetch;
mod flags;
mod interrupt;
mod primitives;
pub mod regs;
pub mod state;
pub mod table;

pub use dispatch::step;
pub use regs::{Flags, RegPair, Registers};
pub use state::{Cpu8080, INPUT_PORT_COUNT, OUTPUT_PORT_COUNT};
