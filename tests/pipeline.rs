//! End-to-end pipeline tests: Helix source in, instruction listing out.

use hlxc::compile;

#[test]
fn init_block_listing() {
    let listing = compile("::gate Door:\ninit:\n• open\n::end");

    assert_eq!(
        listing,
        concat!(
            "; Gate: Door\n",
            "    ; INIT BLOCK\n",
            "    ; action: open\n",
            "    nop\n",
        )
    );
}

#[test]
fn fuse_block_listing() {
    let listing = compile("::gate X:\n::fuse when cond:\n• a = b\n::end");

    assert_eq!(
        listing,
        concat!(
            "; Gate: X\n",
            "    ; FUSE WHEN cond\n",
            "    ; expr: a = b\n",
            "    nop\n",
        )
    );
}

#[test]
fn full_program_listing() {
    let source = concat!(
        "::gate main:\n",
        "\n",
        "   init:\n",
        "      • load.env\n",
        "      • boot.sequence\n",
        "\n",
        "   ::fuse when overheat:\n",
        "      • burn.signal @ch4\n",
        "      • sync.pulse = ENABLED\n",
        "\n",
        "::end\n",
    );

    let listing = compile(source);

    assert_eq!(
        listing,
        concat!(
            "; Gate: main\n",
            "    ; INIT BLOCK\n",
            "    ; action: load.env\n",
            "    nop\n",
            "    ; action: boot.sequence\n",
            "    nop\n",
            "    ; FUSE WHEN overheat\n",
            "    ; expr: burn.signal @ ch4\n",
            "    nop\n",
            "    ; expr: sync.pulse = ENABLED\n",
            "    nop\n",
        )
    );
}

#[test]
fn malformed_fuse_leaves_only_the_gate_header() {
    let listing = compile("::gate Y:\n::fuse foo\n::end");

    assert_eq!(listing, "; Gate: Y\n");
}

#[test]
fn stray_characters_never_reach_the_listing() {
    let listing = compile("::gate Z#:\n::end");

    assert_eq!(listing, "; Gate: Z\n");
    assert!(!listing.contains('#'));
}

#[test]
fn garbled_input_still_produces_a_listing() {
    let listing = compile("???");

    assert_eq!(listing, "; Gate: \n");
}

#[test]
fn compilation_is_deterministic() {
    let source = "::gate D:\ninit:\n• a\n::fuse when c:\n• x = y\n::end";

    assert_eq!(compile(source), compile(source));
}
