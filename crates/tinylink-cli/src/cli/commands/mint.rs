//! `tinylink mint` – print freshly generated short codes.

use tinylink_core::codegen::CodeGenerator;

pub fn run_mint(gen: &CodeGenerator, count: usize) {
    for _ in 0..count {
        println!("{}", gen.generate_code());
    }
}
