//! Abstract syntax tree: the statement and expression sum types the parser
//! produces and the evaluator walks.

use crate::token::Token;

#[derive(Debug, Clone)]
pub enum Statement {
    Var(VarStatement),
    Return(ReturnStatement),
    Expression(ExpressionStatement),
    Block(BlockStatement),
}

#[derive(Debug, Clone)]
pub struct VarStatement {
    pub token: Token,
    pub name: Identifier,
    pub value: Expression,
}

#[derive(Debug, Clone)]
pub struct ReturnStatement {
    pub token: Token,
    pub return_value: Expression,
}

#[derive(Debug, Clone)]
pub struct ExpressionStatement {
    pub token: Token,
    pub expression: Expression,
}

#[derive(Debug, Clone, Default)]
pub struct BlockStatement {
    pub statements: Vec<Statement>,
}

#[derive(Debug, Clone)]
pub enum Expression {
    Identifier(Identifier),
    IntegerLiteral(IntegerLiteral),
    Boolean(BooleanLiteral),
    Prefix(PrefixExpression),
    Infix(InfixExpression),
    If(IfExpression),
    Function(FunctionLiteral),
    Call(CallExpression),
    /// Emitted when the parser could not produce an expression (a recorded
    /// error); lets `parse_expression_statement` return a well-formed
    /// statement instead of failing outright (spec: parser never throws).
    Invalid,
}

#[derive(Debug, Clone)]
pub struct Identifier {
    pub token: Token,
    pub value: String,
}

#[derive(Debug, Clone)]
pub struct IntegerLiteral {
    pub token: Token,
    pub value: i64,
}

#[derive(Debug, Clone)]
pub struct BooleanLiteral {
    pub token: Token,
    pub value: bool,
}

#[derive(Debug, Clone)]
pub struct PrefixExpression {
    pub token: Token,
    pub operator: String,
    pub right: Box<Expression>,
}

#[derive(Debug, Clone)]
pub struct InfixExpression {
    pub token: Token,
    pub left: Box<Expression>,
    pub operator: String,
    pub right: Box<Expression>,
}

#[derive(Debug, Clone)]
pub struct IfExpression {
    pub token: Token,
    pub condition: Box<Expression>,
    pub consequence: BlockStatement,
    pub alternative: Option<BlockStatement>,
}

#[derive(Debug, Clone)]
pub struct FunctionLiteral {
    pub token: Token,
    pub parameters: Vec<Identifier>,
    pub body: BlockStatement,
}

#[derive(Debug, Clone)]
pub struct CallExpression {
    pub token: Token,
    pub function: Box<Expression>,
    pub arguments: Vec<Expression>,
}

#[derive(Debug, Clone, Default)]
pub struct Program {
    pub statements: Vec<Statement>,
}

impl Program {
    pub fn to_code_string(&self) -> String {
        self.statements.iter().map(Statement::to_code_string).collect()
    }
}

fn join(items: &[impl ToCodeString], sep: &str) -> String {
    items
        .iter()
        .map(ToCodeString::to_code_string)
        .collect::<Vec<_>>()
        .join(sep)
}

/// The diagnostic/round-trip string form described in spec §6.4.
pub trait ToCodeString {
    fn to_code_string(&self) -> String;
}

impl ToCodeString for Statement {
    fn to_code_string(&self) -> String {
        match self {
            Statement::Var(s) => format!("var {} = {};", s.name.value, s.value.to_code_string()),
            Statement::Return(s) => format!("kthen {};", s.return_value.to_code_string()),
            Statement::Expression(s) => s.expression.to_code_string(),
            Statement::Block(b) => b.to_code_string(),
        }
    }
}

impl ToCodeString for BlockStatement {
    fn to_code_string(&self) -> String {
        self.statements.iter().map(Statement::to_code_string).collect()
    }
}

impl ToCodeString for Identifier {
    fn to_code_string(&self) -> String {
        self.value.clone()
    }
}

impl ToCodeString for Expression {
    fn to_code_string(&self) -> String {
        match self {
            Expression::Identifier(id) => id.value.clone(),
            Expression::IntegerLiteral(lit) => lit.value.to_string(),
            Expression::Boolean(b) => if b.value { "vertet" } else { "falso" }.to_string(),
            Expression::Prefix(p) => format!("({}{})", p.operator, p.right.to_code_string()),
            Expression::Infix(i) => format!(
                "({} {} {})",
                i.left.to_code_string(),
                i.operator,
                i.right.to_code_string()
            ),
            Expression::If(if_expr) => {
                let mut out = format!(
                    "nese{} {}",
                    if_expr.condition.to_code_string(),
                    if_expr.consequence.to_code_string()
                );
                if let Some(alt) = &if_expr.alternative {
                    out.push_str(&format!("perndryshe{}", alt.to_code_string()));
                }
                out
            }
            Expression::Function(f) => format!(
                "funksion({}){}",
                join(&f.parameters, ", "),
                f.body.to_code_string()
            ),
            Expression::Call(c) => format!(
                "{}({})",
                c.function.to_code_string(),
                join(&c.arguments, ", ")
            ),
            Expression::Invalid => String::new(),
        }
    }
}
