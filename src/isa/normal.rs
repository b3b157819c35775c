//! Full-width (32-bit) encodings, grouped by ICLASS.

use super::*;

/// Priority-ordered; aliases precede the general form they overlap.
pub static NORMAL: &[Encoding] = &[
    enc!(32, ImmExt, "0000_iiii_iiii_iiii_PPii_iiii_iiii_iiii", "immext({0})", 'i' => u(6)),
    // ICLASS 3
    enc!(32, L4LoadriRr, "0011_1010_100s_ssss_PPit_tttt_i--d_dddd", "{0} = memw({1}+{2}<<{3})",
        'd' => R, 's' => R, 't' => R, 'i' => u(0)),
    enc!(32, S4StoreriRr, "0011_1011_100s_ssss_PPiu_uuuu_i--t_tttt", "memw({0}+{1}<<{2}) = {3}",
        's' => R, 'u' => R, 'i' => u(0), 't' => R),
    // ICLASS 4
    enc!(32, L2PloadritIo, "0100_0001_100s_ssss_PP0t_tiii_iiid_dddd", "if ({0}) {1} = memw({2}+{3})",
        't' => PT, 'd' => R, 's' => R, 'i' => u_ext(2)),
    enc!(32, L2PloadrifIo, "0100_0101_100s_ssss_PP0t_tiii_iiid_dddd", "if ({0}) {1} = memw({2}+{3})",
        't' => PF, 'd' => R, 's' => R, 'i' => u_ext(2)),
    enc!(32, S2PstoreritIo, "0100_0000_100s_ssss_PPit_tttt_iiii_i0vv", "if ({0}) memw({1}+{2}) = {3}",
        'v' => PT, 's' => R, 'i' => u_ext(2), 't' => R),
    enc!(32, S2PstorerifIo, "0100_0100_100s_ssss_PPit_tttt_iiii_i0vv", "if ({0}) memw({1}+{2}) = {3}",
        'v' => PF, 's' => R, 'i' => u_ext(2), 't' => R),
    enc!(32, L2LoadrigpIo, "0100_1ii1_100i_iiii_PPii_iiii_iiid_dddd", "{0} = memw(GP+{1})",
        'd' => R, 'i' => u_ext(2)),
    enc!(32, S2StorerigpIo, "0100_1ii0_100i_iiii_PPit_tttt_iiii_iiii", "memw(GP+{0}) = {1}",
        'i' => u_ext(2), 't' => R),
    // ICLASS 5
    enc!(32, J2Jumpr, "0101_0010_100s_ssss_PP--_----_----_----", "jumpr {0}", 's' => R),
    enc!(32, J2Callr, "0101_0000_101s_ssss_PP--_----_----_----", "callr {0}", 's' => R),
    enc!(32, J2Jumprt, "0101_0011_010s_ssss_PP-0_--uu_----_----", "if ({0}) jumpr {1}",
        'u' => PT, 's' => R),
    enc!(32, J2Jumprf, "0101_0011_011s_ssss_PP-0_--uu_----_----", "if ({0}) jumpr {1}",
        'u' => PF, 's' => R),
    enc!(32, J2Trap0, "0101_0100_00--_----_PP-i_iiii_---i_ii--", "trap0({0})", 'i' => u(0)),
    enc!(32, J2Jump, "0101_100i_iiii_iiii_PPii_iiii_iiii_iii-", "jump {0}", 'i' => pcrel(2)),
    enc!(32, J2Call, "0101_101i_iiii_iiii_PPii_iiii_iiii_iii0", "call {0}", 'i' => pcrel(2)),
    enc!(32, J2Jumpt, "0101_1100_ii0i_iiii_PPih_0-uu_iiii_iii-", "if ({0}) jump{1} {2}",
        'u' => PT, 'h' => HINT, 'i' => pcrel(2)),
    enc!(32, J2Jumpf, "0101_1100_ii1i_iiii_PPih_0-uu_iiii_iii-", "if ({0}) jump{1} {2}",
        'u' => PF, 'h' => HINT, 'i' => pcrel(2)),
    enc!(32, J2Jumptnew, "0101_1100_ii0i_iiii_PPih_1-uu_iiii_iii-", "if ({0}) jump{1} {2}",
        'u' => PTN, 'h' => HINT, 'i' => pcrel(2)),
    enc!(32, J2Jumpfnew, "0101_1100_ii1i_iiii_PPih_1-uu_iiii_iii-", "if ({0}) jump{1} {2}",
        'u' => PFN, 'h' => HINT, 'i' => pcrel(2)),
    enc!(32, J2Callt, "0101_1101_ii0i_iiii_PP-i_--uu_iiii_iii-", "if ({0}) call {1}",
        'u' => PT, 'i' => pcrel(2)),
    enc!(32, J2Callf, "0101_1101_ii1i_iiii_PP-i_--uu_iiii_iii-", "if ({0}) call {1}",
        'u' => PF, 'i' => pcrel(2)),
    // ICLASS 6
    enc!(32, J2Loop0i, "0110_1001_000I_IIII_PP-i_iiii_IIIi_i-II", "loop0({0},{1})",
        'i' => pcrel(2), 'I' => u(0)),
    enc!(32, J2Loop1i, "0110_1001_001I_IIII_PP-i_iiii_IIIi_i-II", "loop1({0},{1})",
        'i' => pcrel(2), 'I' => u(0)),
    enc!(32, J2Loop0r, "0110_0000_000s_ssss_PP-i_iiii_---i_i---", "loop0({0},{1})",
        'i' => pcrel(2), 's' => R),
    enc!(32, J2Loop1r, "0110_0000_001s_ssss_PP-i_iiii_---i_i---", "loop1({0},{1})",
        'i' => pcrel(2), 's' => R),
    enc!(32, A2Tfrrcr, "0110_0010_001s_ssss_PP--_----_---d_dddd", "{0} = {1}", 'd' => CR, 's' => R),
    enc!(32, A4Tfrpcp, "0110_0011_001s_ssss_PP--_----_---d_dddd", "{0} = {1}", 'd' => CRR, 's' => RR),
    enc!(32, A4Tfrcpp, "0110_1000_000s_ssss_PP--_----_---d_dddd", "{0} = {1}", 'd' => RR, 's' => CRR),
    enc!(32, A2Tfrcrr, "0110_1010_000s_ssss_PP--_----_---d_dddd", "{0} = {1}", 'd' => R, 's' => CR),
    enc!(32, C2And, "0110_1011_0000_--ss_PP0-_--tt_----_--dd", "{0} = and({1},{2})",
        'd' => PR, 's' => PR, 't' => PR),
    enc!(32, C2Or, "0110_1011_0010_--ss_PP0-_--tt_----_--dd", "{0} = or({1},{2})",
        'd' => PR, 's' => PR, 't' => PR),
    enc!(32, C2Not, "0110_1011_1100_--ss_PP0-_----_----_--dd", "{0} = not({1})",
        'd' => PR, 's' => PR),
    // ICLASS 7
    enc!(32, A2Tfr, "0111_0000_011s_ssss_PP0-_----_---d_dddd", "{0} = {1}", 'd' => R, 's' => R),
    enc!(32, A2Tfril, "0111_0001_ii1x_xxxx_PPii_iiii_iiii_iiii", "{0}.L = {1}", 'x' => R, 'i' => u(0)),
    enc!(32, A2Tfrih, "0111_0010_ii1x_xxxx_PPii_iiii_iiii_iiii", "{0}.H = {1}", 'x' => R, 'i' => u(0)),
    enc!(32, A2Paddit, "0111_0100_0uus_ssss_PP0i_iiii_iiid_dddd", "if ({0}) {1} = add({2},{3})",
        'u' => PT, 'd' => R, 's' => R, 'i' => s_ext(0)),
    enc!(32, A2Paddif, "0111_0100_1uus_ssss_PP0i_iiii_iiid_dddd", "if ({0}) {1} = add({2},{3})",
        'u' => PF, 'd' => R, 's' => R, 'i' => s_ext(0)),
    enc!(32, A2Padditnew, "0111_0100_0uus_ssss_PP1i_iiii_iiid_dddd", "if ({0}) {1} = add({2},{3})",
        'u' => PTN, 'd' => R, 's' => R, 'i' => s_ext(0)),
    enc!(32, A2Paddifnew, "0111_0100_1uus_ssss_PP1i_iiii_iiid_dddd", "if ({0}) {1} = add({2},{3})",
        'u' => PFN, 'd' => R, 's' => R, 'i' => s_ext(0)),
    enc!(32, C2Cmpeqi, "0111_0101_00is_ssss_PPii_iiii_iii0_00dd", "{0} = cmp.eq({1},{2})",
        'd' => PR, 's' => R, 'i' => s_ext(0)),
    enc!(32, C2Cmpgti, "0111_0101_01is_ssss_PPii_iiii_iii0_00dd", "{0} = cmp.gt({1},{2})",
        'd' => PR, 's' => R, 'i' => s_ext(0)),
    enc!(32, C2Cmpgtui, "0111_0101_100s_ssss_PPii_iiii_iii0_00dd", "{0} = cmp.gtu({1},{2})",
        'd' => PR, 's' => R, 'i' => u_ext(0)),
    enc!(32, A2Andir, "0111_0110_00is_ssss_PPii_iiii_iiid_dddd", "{0} = and({1},{2})",
        'd' => R, 's' => R, 'i' => s_ext(0)),
    enc!(32, A2Subri, "0111_0110_01is_ssss_PPii_iiii_iiid_dddd", "{0} = sub({1},{2})",
        'd' => R, 'i' => s_ext(0), 's' => R),
    enc!(32, A2Orir, "0111_0110_10is_ssss_PPii_iiii_iiid_dddd", "{0} = or({1},{2})",
        'd' => R, 's' => R, 'i' => s_ext(0)),
    enc!(32, A2Tfrsi, "0111_1000_ii-i_iiii_PPii_iiii_iiid_dddd", "{0} = {1}", 'd' => R, 'i' => s_ext(0)),
    enc!(32, A2Combineii, "0111_1100_0III_IIII_PPIi_iiii_iiid_dddd", "{0} = combine({1},{2})",
        'd' => RR, 'i' => s_ext(0), 'I' => s(0)),
    enc!(32, A2Nop, "0111_1111_----_----_PP--_----_----_----", "nop"),
    // ICLASS 8
    enc!(32, S2AsrIR, "1000_1100_000s_ssss_PP0i_iiii_000d_dddd", "{0} = asr({1},{2})",
        'd' => R, 's' => R, 'i' => u(0)),
    enc!(32, S2LsrIR, "1000_1100_000s_ssss_PP0i_iiii_001d_dddd", "{0} = lsr({1},{2})",
        'd' => R, 's' => R, 'i' => u(0)),
    enc!(32, S2AslIR, "1000_1100_000s_ssss_PP0i_iiii_010d_dddd", "{0} = asl({1},{2})",
        'd' => R, 's' => R, 'i' => u(0)),
    // ICLASS 9
    enc!(32, Deallocframe, "1001_0000_0001_1110_PP0-_----_---1_1110", "deallocframe"),
    enc!(32, L2Deallocframe, "1001_0000_000s_ssss_PP0-_----_---d_dddd", "{0} = deallocframe({1}):raw",
        'd' => RR, 's' => R),
    enc!(32, DeallocReturn, "1001_0110_0001_1110_PP00_00--_---1_1110", "dealloc_return"),
    enc!(32, L4Return, "1001_0110_000s_ssss_PP00_00--_---d_dddd", "{0} = dealloc_return({1}):raw",
        'd' => RR, 's' => R),
    enc!(32, L2LoadrbIo, "1001_0ii1_000s_ssss_PPii_iiii_iiid_dddd", "{0} = memb({1}+{2})",
        'd' => R, 's' => R, 'i' => s_ext(0)),
    enc!(32, L2LoadrubIo, "1001_0ii1_001s_ssss_PPii_iiii_iiid_dddd", "{0} = memub({1}+{2})",
        'd' => R, 's' => R, 'i' => s_ext(0)),
    enc!(32, L2LoadrhIo, "1001_0ii1_010s_ssss_PPii_iiii_iiid_dddd", "{0} = memh({1}+{2})",
        'd' => R, 's' => R, 'i' => s_ext(1)),
    enc!(32, L2LoadruhIo, "1001_0ii1_011s_ssss_PPii_iiii_iiid_dddd", "{0} = memuh({1}+{2})",
        'd' => R, 's' => R, 'i' => s_ext(1)),
    enc!(32, L2LoadriIo, "1001_0ii1_100s_ssss_PPii_iiii_iiid_dddd", "{0} = memw({1}+{2})",
        'd' => R, 's' => R, 'i' => s_ext(2)),
    enc!(32, L2LoadrdIo, "1001_0ii1_110s_ssss_PPii_iiii_iiid_dddd", "{0} = memd({1}+{2})",
        'd' => RR, 's' => R, 'i' => s_ext(3)),
    enc!(32, L2LoadriPi, "1001_1011_100x_xxxx_PP00_---i_iiid_dddd", "{0} = memw({1}++{2})",
        'd' => R, 'x' => R, 'i' => s(2)),
    enc!(32, L2LoadriPr, "1001_1101_100x_xxxx_PPu0_----_0--d_dddd", "{0} = memw({1}++{2})",
        'd' => R, 'x' => R, 'u' => MR),
    // ICLASS A
    enc!(32, Allocframe, "1010_0000_1001_1101_PP00_0iii_iiii_iiii", "allocframe({0})", 'i' => u(3)),
    enc!(32, S2Allocframe, "1010_0000_100x_xxxx_PP00_0iii_iiii_iiii", "allocframe({0},{1}):raw",
        'x' => R, 'i' => u(3)),
    enc!(32, Y2Barrier, "1010_1000_0000_0000_PP0-_----_----_----", "barrier"),
    enc!(32, S2StorerbIo, "1010_0ii1_000s_ssss_PPit_tttt_iiii_iiii", "memb({0}+{1}) = {2}",
        's' => R, 'i' => s_ext(0), 't' => R),
    enc!(32, S2StorerhIo, "1010_0ii1_010s_ssss_PPit_tttt_iiii_iiii", "memh({0}+{1}) = {2}",
        's' => R, 'i' => s_ext(1), 't' => R),
    enc!(32, S2StoreriIo, "1010_0ii1_100s_ssss_PPit_tttt_iiii_iiii", "memw({0}+{1}) = {2}",
        's' => R, 'i' => s_ext(2), 't' => R),
    enc!(32, S2StorerdIo, "1010_0ii1_110s_ssss_PPit_tttt_iiii_iiii", "memd({0}+{1}) = {2}",
        's' => R, 'i' => s_ext(3), 't' => RR),
    // ICLASS B
    enc!(32, A2Addi, "1011_iiii_iiis_ssss_PPii_iiii_iiid_dddd", "{0} = add({1},{2})",
        'd' => R, 's' => R, 'i' => s_ext(0)),
    // ICLASS D
    enc!(32, A2Addp, "1101_0011_000s_ssss_PP-t_tttt_111d_dddd", "{0} = add({1},{2})",
        'd' => RR, 's' => RR, 't' => RR),
    // ICLASS E
    enc!(32, M2Mpyi, "1110_1101_000s_ssss_PP0t_tttt_000d_dddd", "{0} = mpyi({1},{2})",
        'd' => R, 's' => R, 't' => R),
    enc!(32, M2Macsip, "1110_0001_000s_ssss_PP0i_iiii_iiix_xxxx", "{0} += mpyi({1},{2})",
        'x' => R, 's' => R, 'i' => u_ext(0)),
    // ICLASS F
    enc!(32, A2And, "1111_0001_000s_ssss_PP-t_tttt_---d_dddd", "{0} = and({1},{2})",
        'd' => R, 's' => R, 't' => R),
    enc!(32, A2Or, "1111_0001_001s_ssss_PP-t_tttt_---d_dddd", "{0} = or({1},{2})",
        'd' => R, 's' => R, 't' => R),
    enc!(32, A2Xor, "1111_0001_011s_ssss_PP-t_tttt_---d_dddd", "{0} = xor({1},{2})",
        'd' => R, 's' => R, 't' => R),
    enc!(32, C2Cmpeq, "1111_0010_-00s_ssss_PP-t_tttt_---0_00dd", "{0} = cmp.eq({1},{2})",
        'd' => PR, 's' => R, 't' => R),
    enc!(32, C2Cmpgt, "1111_0010_-10s_ssss_PP-t_tttt_---0_00dd", "{0} = cmp.gt({1},{2})",
        'd' => PR, 's' => R, 't' => R),
    enc!(32, C2Cmpgtu, "1111_0010_-11s_ssss_PP-t_tttt_---0_00dd", "{0} = cmp.gtu({1},{2})",
        'd' => PR, 's' => R, 't' => R),
    enc!(32, A2Add, "1111_0011_000s_ssss_PP-t_tttt_---d_dddd", "{0} = add({1},{2})",
        'd' => R, 's' => R, 't' => R),
    enc!(32, A2Sub, "1111_0011_001s_ssss_PP-t_tttt_---d_dddd", "{0} = sub({1},{2})",
        'd' => R, 't' => R, 's' => R),
    enc!(32, C2Mux, "1111_0100_---s_ssss_PP-t_tttt_-uud_dddd", "{0} = mux({1},{2},{3})",
        'd' => R, 'u' => PR, 's' => R, 't' => R),
    enc!(32, A2Combinew, "1111_0101_0--s_ssss_PP-t_tttt_---d_dddd", "{0} = combine({1},{2})",
        'd' => RR, 's' => R, 't' => R),
];
