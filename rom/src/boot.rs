use core::{arch::global_asm, panic::PanicInfo};

use de1soc::board::Board;

use crate::main;

#[panic_handler]
fn panic(info: &PanicInfo<'_>) -> ! {
    log::error!("{}", info);
    loop {
        core::hint::spin_loop();
    }
}

// Exception vectors at address 0. Only reset is used; everything else parks
// the core, since interrupts stay masked for the whole run.
global_asm!(
    r#"
    .section .vectors, "ax"
    .global _vectors
_vectors:
    b _start
    b .
    b .
    b .
    b .
    nop
    b .
    b .

    .section .text._start, "ax"
    .global _start
_start:
    cpsid if
    ldr sp, =__stack_top
    bl __boot
    b .
"#
);

unsafe extern "C" {
    unsafe static __sidata: u8;
    unsafe static mut __sdata: u8;
    unsafe static mut __edata: u8;

    unsafe static mut __sbss: u8;
    unsafe static mut __ebss: u8;
}

#[inline(always)]
unsafe fn init_data_and_bss() {
    unsafe {
        // Copy .data from its load address
        let mut src = &raw const __sidata;
        let mut dst = &raw mut __sdata;
        let end = &raw mut __edata;
        while dst < end {
            dst.write_volatile(src.read_volatile());
            src = src.add(1);
            dst = dst.add(1);
        }

        // Zero .bss
        let mut bss = &raw mut __sbss;
        let bss_end = &raw mut __ebss;
        while bss < bss_end {
            bss.write_volatile(0);
            bss = bss.add(1);
        }
    }
}

#[unsafe(no_mangle)]
unsafe extern "C" fn __boot() -> ! {
    unsafe {
        init_data_and_bss();
        main(Board::init())
    }
}
