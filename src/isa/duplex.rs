//! 13-bit sub-instruction tables used inside duplex words.

use super::*;
use crate::regs::Reg;

const SP: FieldKind = implicit(Reg::int(29));
const LR: FieldKind = implicit(Reg::int(31));
const P0: FieldKind = implicit(Reg::pred(0));

/// Sub-instruction group a duplex half is decoded through.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SubGroup {
    L1,
    L2,
    S1,
    S2,
    A,
}

impl SubGroup {
    pub fn table(self) -> &'static [Encoding] {
        match self {
            SubGroup::L1 => L1,
            SubGroup::L2 => L2,
            SubGroup::S1 => S1,
            SubGroup::S2 => S2,
            SubGroup::A => A,
        }
    }
}

/// `(low, high)` groups for a duplex class; class 0xF is reserved.
pub fn class_groups(class: u32) -> Option<(SubGroup, SubGroup)> {
    use SubGroup::*;
    let pair = match class {
        0x0 => (L1, L1),
        0x1 => (L1, L2),
        0x2 => (L2, L2),
        0x3 => (A, A),
        0x4 => (L1, A),
        0x5 => (L2, A),
        0x6 => (S1, A),
        0x7 => (S2, A),
        0x8 => (S1, L1),
        0x9 => (S1, L2),
        0xa => (S1, S1),
        0xb => (S2, S1),
        0xc => (S2, L1),
        0xd => (S2, L2),
        0xe => (S2, S2),
        _ => return None,
    };
    Some(pair)
}

pub static L1: &[Encoding] = &[
    enc!(13, SL1Loadri, "0_iiii_ssss_dddd", "{0} = memw({1}+{2})", 'd' => SR, 's' => SR, 'i' => u(2)),
    enc!(13, SL1Loadrub, "1_iiii_ssss_dddd", "{0} = memub({1}+{2})", 'd' => SR, 's' => SR, 'i' => u(0)),
];

pub static L2: &[Encoding] = &[
    enc!(13, SL2Loadrh, "00_iii_ssss_dddd", "{0} = memh({1}+{2})", 'd' => SR, 's' => SR, 'i' => u(1)),
    enc!(13, SL2Loadruh, "01_iii_ssss_dddd", "{0} = memuh({1}+{2})", 'd' => SR, 's' => SR, 'i' => u(1)),
    enc!(13, SL2Loadrb, "10_iii_ssss_dddd", "{0} = memb({1}+{2})", 'd' => SR, 's' => SR, 'i' => u(0)),
    enc!(13, SL2LoadriSp, "1110_iiiii_dddd", "{0} = memw({1}+{2})", 'd' => SR, '_' => SP, 'i' => u(2)),
    enc!(13, SL2LoadrdSp, "11110_iiiii_ddd", "{0} = memd({1}+{2})", 'd' => SRR, '_' => SP, 'i' => u(3)),
    enc!(13, SL2Deallocframe, "11111_00---_0--", "deallocframe"),
    enc!(13, SL2Return, "11111_01---_000", "dealloc_return"),
    enc!(13, SL2ReturnT, "11111_01---_100", "if ({0}) dealloc_return",
        '_' => implicit_pred(PredSense::True)),
    enc!(13, SL2ReturnF, "11111_01---_101", "if ({0}) dealloc_return",
        '_' => implicit_pred(PredSense::False)),
    enc!(13, SL2ReturnTnew, "11111_01---_110", "if ({0}) dealloc_return:nt",
        '_' => implicit_pred(PredSense::TrueNew)),
    enc!(13, SL2ReturnFnew, "11111_01---_111", "if ({0}) dealloc_return:nt",
        '_' => implicit_pred(PredSense::FalseNew)),
    enc!(13, SL2Jumpr31, "11111_11---_000", "jumpr {0}", '_' => LR),
    enc!(13, SL2Jumpr31T, "11111_11---_100", "if ({0}) jumpr {1}",
        '_' => implicit_pred(PredSense::True), '_' => LR),
    enc!(13, SL2Jumpr31F, "11111_11---_101", "if ({0}) jumpr {1}",
        '_' => implicit_pred(PredSense::False), '_' => LR),
    enc!(13, SL2Jumpr31Tnew, "11111_11---_110", "if ({0}) jumpr:nt {1}",
        '_' => implicit_pred(PredSense::TrueNew), '_' => LR),
    enc!(13, SL2Jumpr31Fnew, "11111_11---_111", "if ({0}) jumpr:nt {1}",
        '_' => implicit_pred(PredSense::FalseNew), '_' => LR),
];

pub static S1: &[Encoding] = &[
    enc!(13, SS1Storew, "0_iiii_ssss_tttt", "memw({0}+{1}) = {2}", 's' => SR, 'i' => u(2), 't' => SR),
    enc!(13, SS1Storeb, "1_iiii_ssss_tttt", "memb({0}+{1}) = {2}", 's' => SR, 'i' => u(0), 't' => SR),
];

pub static S2: &[Encoding] = &[
    enc!(13, SS2Storeh, "00_iii_ssss_tttt", "memh({0}+{1}) = {2}", 's' => SR, 'i' => u(1), 't' => SR),
    enc!(13, SS2StorewSp, "0100_iiiii_tttt", "memw({0}+{1}) = {2}", '_' => SP, 'i' => u(2), 't' => SR),
    enc!(13, SS2StoredSp, "0101_iiiiii_ttt", "memd({0}+{1}) = {2}", '_' => SP, 'i' => s(3), 't' => SRR),
    enc!(13, SS2Storewi0, "1_0000_ssss_iiii", "memw({0}+{1}) = #0", 's' => SR, 'i' => u(2)),
    enc!(13, SS2Storewi1, "1_0001_ssss_iiii", "memw({0}+{1}) = #1", 's' => SR, 'i' => u(2)),
    enc!(13, SS2Storebi0, "1_0010_ssss_iiii", "memb({0}+{1}) = #0", 's' => SR, 'i' => u(0)),
    enc!(13, SS2Storebi1, "1_0011_ssss_iiii", "memb({0}+{1}) = #1", 's' => SR, 'i' => u(0)),
    enc!(13, SS2Allocframe, "1110_iiiii_----", "allocframe({0})", 'i' => u(3)),
];

pub static A: &[Encoding] = &[
    enc!(13, SA1Addi, "00_iiiiiii_xxxx", "{0} = add({0},{1})", 'x' => SR, 'i' => s_ext(0)),
    enc!(13, SA1Seti, "010_iiiiii_dddd", "{0} = {1}", 'd' => SR, 'i' => u_ext(0)),
    enc!(13, SA1Addsp, "011_iiiiii_dddd", "{0} = add({1},{2})", 'd' => SR, '_' => SP, 'i' => u(2)),
    enc!(13, SA1Tfr, "1_0000_ssss_dddd", "{0} = {1}", 'd' => SR, 's' => SR),
    enc!(13, SA1Inc, "1_0001_ssss_dddd", "{0} = add({1},#1)", 'd' => SR, 's' => SR),
    enc!(13, SA1And1, "1_0010_ssss_dddd", "{0} = and({1},#1)", 'd' => SR, 's' => SR),
    enc!(13, SA1Dec, "1_0011_ssss_dddd", "{0} = add({1},#-1)", 'd' => SR, 's' => SR),
    enc!(13, SA1Sxth, "1_0100_ssss_dddd", "{0} = sxth({1})", 'd' => SR, 's' => SR),
    enc!(13, SA1Sxtb, "1_0101_ssss_dddd", "{0} = sxtb({1})", 'd' => SR, 's' => SR),
    enc!(13, SA1Zxth, "1_0110_ssss_dddd", "{0} = zxth({1})", 'd' => SR, 's' => SR),
    enc!(13, SA1Zxtb, "1_0111_ssss_dddd", "{0} = and({1},#255)", 'd' => SR, 's' => SR),
    enc!(13, SA1Addrx, "1_1000_ssss_xxxx", "{0} = add({0},{1})", 'x' => SR, 's' => SR),
    enc!(13, SA1Cmpeqi, "1_1001_ssss_--ii", "{0} = cmp.eq({1},{2})", '_' => P0, 's' => SR, 'i' => u(0)),
    enc!(13, SA1Setin1, "1_1010_0---_dddd", "{0} = #-1", 'd' => SR),
    enc!(13, SA1Clrt, "1_1011_-100_dddd", "if ({0}) {1} = #0",
        '_' => implicit_pred(PredSense::True), 'd' => SR),
    enc!(13, SA1Clrf, "1_1011_-101_dddd", "if ({0}) {1} = #0",
        '_' => implicit_pred(PredSense::False), 'd' => SR),
    enc!(13, SA1Clrtnew, "1_1011_-110_dddd", "if ({0}) {1} = #0",
        '_' => implicit_pred(PredSense::TrueNew), 'd' => SR),
    enc!(13, SA1Clrfnew, "1_1011_-111_dddd", "if ({0}) {1} = #0",
        '_' => implicit_pred(PredSense::FalseNew), 'd' => SR),
    enc!(13, SA1Combineii, "1_1100_IIii_-ddd", "{0} = combine({1},{2})", 'd' => SRR, 'I' => u(0), 'i' => u(0)),
    enc!(13, SA1Combinezr, "1_1101_ssss_0ddd", "{0} = combine(#0,{1})", 'd' => SRR, 's' => SR),
    enc!(13, SA1Combinerz, "1_1101_ssss_1ddd", "{0} = combine({1},#0)", 'd' => SRR, 's' => SR),
];
