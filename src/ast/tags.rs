use std::fmt::Display;

/// Kinds of interior tree nodes.
///
/// A rule whose metadata carries a tag materializes a node of that kind on
/// reduction; untagged rules splice their children into the enclosing rule.
#[derive(Debug, PartialEq, Eq, Clone, Copy, Hash, PartialOrd, Ord)]
pub enum NodeTag {
    Program,
    FuncDef,
    FuncHead,
    DclSpec,
    ConstType,
    IntType,
    VoidType,
    FormalPara,
    ParamDcl,
    CompoundSt,
    DclList,
    Dcl,
    DclItem,
    SimpleVar,
    ArrayVar,
    StatList,
    ExpSt,
    CaseSt,
    DefaultSt,
    ContinueSt,
    BreakSt,
    IfSt,
    IfElseSt,
    WhileSt,
    DoWhileSt,
    SwitchSt,
    ForSt,
    InitPart,
    ConditionPart,
    PostPart,
    ReturnSt,
    AssignOp,
    AddAssign,
    SubAssign,
    MulAssign,
    DivAssign,
    ModAssign,
    LogicalOr,
    LogicalAnd,
    Eq,
    Ne,
    Gt,
    Lt,
    Ge,
    Le,
    Add,
    Sub,
    Mul,
    Div,
    Remainder,
    UnaryMinus,
    LogicalNot,
    PreInc,
    PreDec,
    Index,
    Call,
    PostInc,
    PostDec,
    ActualParam,
}

impl NodeTag {
    /// Name used by tree dumps.
    pub fn name(self) -> &'static str {
        match self {
            NodeTag::Program => "PROGRAM",
            NodeTag::FuncDef => "FUNC_DEF",
            NodeTag::FuncHead => "FUNC_HEAD",
            NodeTag::DclSpec => "DCL_SPEC",
            NodeTag::ConstType => "CONST_TYPE",
            NodeTag::IntType => "INT_TYPE",
            NodeTag::VoidType => "VOID_TYPE",
            NodeTag::FormalPara => "FORMAL_PARA",
            NodeTag::ParamDcl => "PARAM_DCL",
            NodeTag::CompoundSt => "COMPOUND_ST",
            NodeTag::DclList => "DCL_LIST",
            NodeTag::Dcl => "DCL",
            NodeTag::DclItem => "DCL_ITEM",
            NodeTag::SimpleVar => "SIMPLE_VAR",
            NodeTag::ArrayVar => "ARRAY_VAR",
            NodeTag::StatList => "STAT_LIST",
            NodeTag::ExpSt => "EXP_ST",
            NodeTag::CaseSt => "CASE_ST",
            NodeTag::DefaultSt => "DEFAULT_ST",
            NodeTag::ContinueSt => "CONTINUE_ST",
            NodeTag::BreakSt => "BREAK_ST",
            NodeTag::IfSt => "IF_ST",
            NodeTag::IfElseSt => "IF_ELSE_ST",
            NodeTag::WhileSt => "WHILE_ST",
            NodeTag::DoWhileSt => "DO_WHILE_ST",
            NodeTag::SwitchSt => "SWITCH_ST",
            NodeTag::ForSt => "FOR_ST",
            NodeTag::InitPart => "INIT_PART",
            NodeTag::ConditionPart => "CONDITION_PART",
            NodeTag::PostPart => "POST_PART",
            NodeTag::ReturnSt => "RETURN_ST",
            NodeTag::AssignOp => "ASSIGN_OP",
            NodeTag::AddAssign => "ADD_ASSIGN",
            NodeTag::SubAssign => "SUB_ASSIGN",
            NodeTag::MulAssign => "MUL_ASSIGN",
            NodeTag::DivAssign => "DIV_ASSIGN",
            NodeTag::ModAssign => "MOD_ASSIGN",
            NodeTag::LogicalOr => "LOGICAL_OR",
            NodeTag::LogicalAnd => "LOGICAL_AND",
            NodeTag::Eq => "EQ",
            NodeTag::Ne => "NE",
            NodeTag::Gt => "GT",
            NodeTag::Lt => "LT",
            NodeTag::Ge => "GE",
            NodeTag::Le => "LE",
            NodeTag::Add => "ADD",
            NodeTag::Sub => "SUB",
            NodeTag::Mul => "MUL",
            NodeTag::Div => "DIV",
            NodeTag::Remainder => "REMAINDER",
            NodeTag::UnaryMinus => "UNARY_MINUS",
            NodeTag::LogicalNot => "LOGICAL_NOT",
            NodeTag::PreInc => "PRE_INC",
            NodeTag::PreDec => "PRE_DEC",
            NodeTag::Index => "INDEX",
            NodeTag::Call => "CALL",
            NodeTag::PostInc => "POST_INC",
            NodeTag::PostDec => "POST_DEC",
            NodeTag::ActualParam => "ACTUAL_PARAM",
        }
    }
}

impl Display for NodeTag {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.name())
    }
}
