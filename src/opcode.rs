use serde::{Deserialize, Serialize};

/// Every instruction the decoder knows, named after the LLVM Hexagon records.
///
/// Variants prefixed `S?1`/`S?2` are duplex sub-instructions.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Opcode {
    Invalid,
    ImmExt,

    // ICLASS 3: register-offset memory
    L4LoadriRr,
    S4StoreriRr,

    // ICLASS 4: predicated and GP-relative memory
    L2PloadritIo,
    L2PloadrifIo,
    S2PstoreritIo,
    S2PstorerifIo,
    L2LoadrigpIo,
    S2StorerigpIo,

    // ICLASS 5: jumps, calls, traps
    J2Jumpr,
    J2Callr,
    J2Jumprt,
    J2Jumprf,
    J2Trap0,
    J2Jump,
    J2Call,
    J2Jumpt,
    J2Jumpf,
    J2Jumptnew,
    J2Jumpfnew,
    J2Callt,
    J2Callf,

    // ICLASS 6: loops, control registers, predicate logic
    J2Loop0i,
    J2Loop1i,
    J2Loop0r,
    J2Loop1r,
    A2Tfrrcr,
    A4Tfrpcp,
    A4Tfrcpp,
    A2Tfrcrr,
    C2And,
    C2Or,
    C2Not,

    // ICLASS 7: ALU32 with immediates
    A2Tfr,
    A2Tfril,
    A2Tfrih,
    A2Paddit,
    A2Paddif,
    A2Padditnew,
    A2Paddifnew,
    C2Cmpeqi,
    C2Cmpgti,
    C2Cmpgtui,
    A2Andir,
    A2Subri,
    A2Orir,
    A2Tfrsi,
    A2Combineii,
    A2Nop,

    // ICLASS 8: shifts
    S2AsrIR,
    S2LsrIR,
    S2AslIR,

    // ICLASS 9: loads
    Deallocframe,
    L2Deallocframe,
    DeallocReturn,
    L4Return,
    L2LoadrbIo,
    L2LoadrubIo,
    L2LoadrhIo,
    L2LoadruhIo,
    L2LoadriIo,
    L2LoadrdIo,
    L2LoadriPi,
    L2LoadriPr,

    // ICLASS A: stores, frames, barriers
    Allocframe,
    S2Allocframe,
    Y2Barrier,
    S2StorerbIo,
    S2StorerhIo,
    S2StoreriIo,
    S2StorerdIo,

    // ICLASS B, D, E, F
    A2Addi,
    A2Addp,
    M2Mpyi,
    M2Macsip,
    A2And,
    A2Or,
    A2Xor,
    C2Cmpeq,
    C2Cmpgt,
    C2Cmpgtu,
    A2Add,
    A2Sub,
    C2Mux,
    A2Combinew,

    // Sub-instructions: L1
    SL1Loadri,
    SL1Loadrub,
    // L2
    SL2Loadrh,
    SL2Loadruh,
    SL2Loadrb,
    SL2LoadriSp,
    SL2LoadrdSp,
    SL2Deallocframe,
    SL2Return,
    SL2ReturnT,
    SL2ReturnF,
    SL2ReturnTnew,
    SL2ReturnFnew,
    SL2Jumpr31,
    SL2Jumpr31T,
    SL2Jumpr31F,
    SL2Jumpr31Tnew,
    SL2Jumpr31Fnew,
    // S1
    SS1Storew,
    SS1Storeb,
    // S2
    SS2Storeh,
    SS2StorewSp,
    SS2StoredSp,
    SS2Storewi0,
    SS2Storewi1,
    SS2Storebi0,
    SS2Storebi1,
    SS2Allocframe,
    // A
    SA1Addi,
    SA1Seti,
    SA1Addsp,
    SA1Tfr,
    SA1Inc,
    SA1And1,
    SA1Dec,
    SA1Sxth,
    SA1Sxtb,
    SA1Zxth,
    SA1Zxtb,
    SA1Addrx,
    SA1Cmpeqi,
    SA1Setin1,
    SA1Clrt,
    SA1Clrf,
    SA1Clrtnew,
    SA1Clrfnew,
    SA1Combineii,
    SA1Combinezr,
    SA1Combinerz,
}

impl Opcode {
    pub fn is_invalid(self) -> bool {
        self == Opcode::Invalid
    }

    pub fn is_extender(self) -> bool {
        self == Opcode::ImmExt
    }

    /// Control-flow instructions whose last operand is a branch target or register.
    pub fn is_branch(self) -> bool {
        use Opcode::*;
        matches!(
            self,
            J2Jumpr
                | J2Callr
                | J2Jumprt
                | J2Jumprf
                | J2Jump
                | J2Call
                | J2Jumpt
                | J2Jumpf
                | J2Jumptnew
                | J2Jumpfnew
                | J2Callt
                | J2Callf
                | DeallocReturn
                | L4Return
                | SL2Return
                | SL2ReturnT
                | SL2ReturnF
                | SL2ReturnTnew
                | SL2ReturnFnew
                | SL2Jumpr31
                | SL2Jumpr31T
                | SL2Jumpr31F
                | SL2Jumpr31Tnew
                | SL2Jumpr31Fnew
        )
    }
}
