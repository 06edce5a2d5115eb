use crate::error::SyntaxError;
use crate::lexer::Lexer;
use crate::token::{Kind, Token, KEYWORDS};

/// Checks that a token stream conforms to the Bugs grammar. One matcher per
/// nonterminal; no tree is built and no semantics are checked.
///
/// Every matcher has one of three outcomes:
/// - `Ok(true)`: matched, consuming exactly the tokens of that nonterminal.
/// - `Ok(false)`: no match, consuming nothing.
/// - `Err(SyntaxError)`: the construct committed past its leading token and a
///   required piece is missing. The error aborts the whole recognition pass.
///
/// Matchers that can never fail past their commit point return a plain `bool`.
///
/// A recognizer is bound to one source text for its whole lifetime.
pub struct Recognizer {
    tokens: Vec<Token>,
    pos: usize,
    fetched: bool,
    line: usize,
}

impl Recognizer {
    pub fn new(text: &str) -> Self {
        Self::with_keywords(text, KEYWORDS)
    }

    pub fn with_keywords(text: &str, keywords: &[&str]) -> Self {
        Self {
            tokens: Lexer::with_keywords(text, keywords).tokenize(),
            pos: 0,
            fetched: false,
            // TODO: bump this as Eol tokens are consumed; every diagnostic
            // currently reports line 1.
            line: 1,
        }
    }

    // ----- Grammar rules

    /// `<program> ::= [ <allbugs code> ] <bug definition> { <bug definition> }`
    ///
    /// The principal entry point. The whole token stream must be consumed.
    pub fn is_program(&mut self) -> Result<bool, SyntaxError> {
        if self.is_allbugs_code()? {
            if !self.is_bug_definition()? {
                return Err(self.error("no bug definition after the Allbugs block"));
            }
        } else if !self.is_bug_definition()? {
            return Ok(false);
        }
        while self.is_bug_definition()? {}
        if !self.eof() {
            return Err(self.error("unexpected text after the last bug definition"));
        }
        Ok(true)
    }

    /// `<allbugs code> ::= "Allbugs" "{" <eol> { <var declaration> }
    ///                     { <function definition> } "}" <eol>`
    pub fn is_allbugs_code(&mut self) -> Result<bool, SyntaxError> {
        if !self.keyword("Allbugs") {
            return Ok(false);
        }
        if !self.symbol("{") {
            return Err(self.error("missing '{' after 'Allbugs'"));
        }
        if !self.eol() {
            return Err(self.error("end of line not found"));
        }
        while self.is_var_declaration()? {}
        while self.is_function_definition()? {}
        if !self.symbol("}") {
            return Err(self.error("missing '}'"));
        }
        if !self.eol() {
            return Err(self.error("end of line not found"));
        }
        Ok(true)
    }

    /// `<bug definition> ::= "Bug" <name> "{" <eol> { <var declaration> }
    ///                       [ <initialization block> ] <command> { <command> }
    ///                       { <function definition> } "}" <eol>`
    pub fn is_bug_definition(&mut self) -> Result<bool, SyntaxError> {
        if !self.keyword("Bug") {
            return Ok(false);
        }
        if !self.name() {
            return Err(self.error("no bug name after 'Bug'"));
        }
        if !self.symbol("{") {
            return Err(self.error("missing '{' after the bug name"));
        }
        if !self.eol() {
            return Err(self.error("end of line not found"));
        }
        while self.is_var_declaration()? {}
        self.is_initialization_block()?;
        if !self.is_command()? {
            return Err(self.error("no command in bug definition"));
        }
        while self.is_command()? {}
        while self.is_function_definition()? {}
        if !self.symbol("}") {
            return Err(self.error("missing '}'"));
        }
        if !self.eol() {
            return Err(self.error("end of line not found"));
        }
        Ok(true)
    }

    pub fn is_var_declaration(&mut self) -> Result<bool, SyntaxError> {
        if !self.keyword("var") {
            return Ok(false);
        }
        if !self.name() {
            return Err(self.error("no variable name after 'var'"));
        }
        while self.symbol(",") {
            if !self.name() {
                return Err(self.error("no variable name after ','"));
            }
        }
        if !self.eol() {
            return Err(self.error("end of line not found"));
        }
        Ok(true)
    }

    pub fn is_initialization_block(&mut self) -> Result<bool, SyntaxError> {
        if !self.keyword("initially") {
            return Ok(false);
        }
        if !self.is_block()? {
            return Err(self.error("no block after 'initially'"));
        }
        Ok(true)
    }

    /// `<command> ::= <action> | <statement>`
    pub fn is_command(&mut self) -> Result<bool, SyntaxError> {
        Ok(self.is_action()? || self.is_statement()?)
    }

    /// `<action> ::= <move> | <moveto> | <turn> | <turnto> | <line>`
    pub fn is_action(&mut self) -> Result<bool, SyntaxError> {
        Ok(self.is_move_action()?
            || self.is_move_to_action()?
            || self.is_turn_action()?
            || self.is_turn_to_action()?
            || self.is_line_action()?)
    }

    /// `<statement> ::= <assignment> | <loop> | <exit if> | <switch>
    ///                | <return> | <do> | <color>`
    pub fn is_statement(&mut self) -> Result<bool, SyntaxError> {
        Ok(self.is_assignment_statement()?
            || self.is_loop_statement()?
            || self.is_exit_if_statement()?
            || self.is_switch_statement()?
            || self.is_return_statement()?
            || self.is_do_statement()?
            || self.is_color_statement()?)
    }

    pub fn is_move_action(&mut self) -> Result<bool, SyntaxError> {
        if !self.keyword("move") {
            return Ok(false);
        }
        if !self.is_expression()? {
            return Err(self.error("no expression after 'move'"));
        }
        if !self.eol() {
            return Err(self.error("end of line not found"));
        }
        Ok(true)
    }

    pub fn is_move_to_action(&mut self) -> Result<bool, SyntaxError> {
        if !self.keyword("moveto") {
            return Ok(false);
        }
        if !self.is_expression()? {
            return Err(self.error("no expression after 'moveto'"));
        }
        if !self.symbol(",") {
            return Err(self.error("expected ','"));
        }
        if !self.is_expression()? {
            return Err(self.error("no expression after ','"));
        }
        if !self.eol() {
            return Err(self.error("end of line not found"));
        }
        Ok(true)
    }

    pub fn is_turn_action(&mut self) -> Result<bool, SyntaxError> {
        if !self.keyword("turn") {
            return Ok(false);
        }
        if !self.is_expression()? {
            return Err(self.error("no expression after 'turn'"));
        }
        if !self.eol() {
            return Err(self.error("end of line not found"));
        }
        Ok(true)
    }

    pub fn is_turn_to_action(&mut self) -> Result<bool, SyntaxError> {
        if !self.keyword("turnto") {
            return Ok(false);
        }
        if !self.is_expression()? {
            return Err(self.error("no expression after 'turnto'"));
        }
        if !self.eol() {
            return Err(self.error("end of line not found"));
        }
        Ok(true)
    }

    // A line action carries its four endpoint coordinates.
    pub fn is_line_action(&mut self) -> Result<bool, SyntaxError> {
        if !self.keyword("line") {
            return Ok(false);
        }
        for i in 0..4 {
            if i > 0 && !self.symbol(",") {
                return Err(self.error("expected ','"));
            }
            if !self.is_expression()? {
                return Err(self.error("no expression in line action"));
            }
        }
        if !self.eol() {
            return Err(self.error("end of line not found"));
        }
        Ok(true)
    }

    /// A variable not followed by `=` is not an assignment; both tokens are
    /// rolled back so another alternative can be tried.
    pub fn is_assignment_statement(&mut self) -> Result<bool, SyntaxError> {
        let start = self.mark();
        if !self.is_variable() {
            return Ok(false);
        }
        if !self.symbol("=") {
            self.rewind(start);
            return Ok(false);
        }
        if !self.is_expression()? {
            return Err(self.error("no expression after '='"));
        }
        if !self.eol() {
            return Err(self.error("end of line not found"));
        }
        Ok(true)
    }

    pub fn is_loop_statement(&mut self) -> Result<bool, SyntaxError> {
        if !self.keyword("loop") {
            return Ok(false);
        }
        if !self.is_block()? {
            return Err(self.error("no block after 'loop'"));
        }
        Ok(true)
    }

    pub fn is_exit_if_statement(&mut self) -> Result<bool, SyntaxError> {
        if !self.keyword("exit") {
            return Ok(false);
        }
        if !self.keyword("if") {
            return Err(self.error("missing 'if' after 'exit'"));
        }
        if !self.is_expression()? {
            return Err(self.error("no expression after 'exit if'"));
        }
        if !self.eol() {
            return Err(self.error("end of line not found"));
        }
        Ok(true)
    }

    /// `<switch statement> ::= "switch" "{" <eol>
    ///                         { "case" <expression> <eol> { <command> } }
    ///                         "}" <eol>`
    pub fn is_switch_statement(&mut self) -> Result<bool, SyntaxError> {
        if !self.keyword("switch") {
            return Ok(false);
        }
        if !self.symbol("{") {
            return Err(self.error("missing '{' after 'switch'"));
        }
        if !self.eol() {
            return Err(self.error("end of line not found"));
        }
        while self.keyword("case") {
            if !self.is_expression()? {
                return Err(self.error("no expression after 'case'"));
            }
            if !self.eol() {
                return Err(self.error("end of line not found"));
            }
            while self.is_command()? {}
        }
        if !self.symbol("}") {
            return Err(self.error("missing '}'"));
        }
        if !self.eol() {
            return Err(self.error("end of line not found"));
        }
        Ok(true)
    }

    pub fn is_return_statement(&mut self) -> Result<bool, SyntaxError> {
        if !self.keyword("return") {
            return Ok(false);
        }
        if !self.is_expression()? {
            return Err(self.error("no expression after 'return'"));
        }
        if !self.eol() {
            return Err(self.error("end of line not found"));
        }
        Ok(true)
    }

    pub fn is_do_statement(&mut self) -> Result<bool, SyntaxError> {
        if !self.keyword("do") {
            return Ok(false);
        }
        if !self.is_variable() {
            return Err(self.error("no variable after 'do'"));
        }
        self.is_parameter_list()?;
        if !self.eol() {
            return Err(self.error("end of line not found"));
        }
        Ok(true)
    }

    /// Any keyword satisfies the color slot; the color names are part of the
    /// keyword set, and whether the keyword actually names a color is a
    /// semantic question, not a syntactic one.
    pub fn is_color_statement(&mut self) -> Result<bool, SyntaxError> {
        if !self.keyword("color") {
            return Ok(false);
        }
        if !self.any_keyword() {
            return Err(self.error("missing color name"));
        }
        if !self.eol() {
            return Err(self.error("end of line not found"));
        }
        Ok(true)
    }

    /// `<block> ::= "{" <eol> { <command> } "}" <eol>`
    pub fn is_block(&mut self) -> Result<bool, SyntaxError> {
        if !self.symbol("{") {
            return Ok(false);
        }
        if !self.is_eol() {
            return Err(self.error("end of line not found after '{'"));
        }
        loop {
            if self.is_command()? {
                continue;
            }
            if self.symbol("}") {
                break;
            }
            return Err(self.error("incomplete block, missing '}'"));
        }
        if !self.is_eol() {
            return Err(self.error("end of line not found after '}'"));
        }
        Ok(true)
    }

    /// `<function definition> ::= "define" <NAME>
    ///                            [ "using" <variable> { "," <variable> } ]
    ///                            <block>`
    pub fn is_function_definition(&mut self) -> Result<bool, SyntaxError> {
        if !self.keyword("define") {
            return Ok(false);
        }
        // Not yet committed; a lone 'define' falls through to the caller.
        if !self.name() {
            return Ok(false);
        }
        if self.keyword("using") {
            if !self.is_variable() {
                return Ok(false);
            }
            while self.symbol(",") {
                if !self.is_variable() {
                    return Err(self.error("no variable after ','"));
                }
            }
        }
        if !self.is_block()? {
            return Err(self.error("no block in function definition"));
        }
        Ok(true)
    }

    /// `<eol> ::= EOL { EOL }`
    ///
    /// Blocks consume a whole group of line ends; everywhere else a single
    /// raw Eol token is required.
    pub fn is_eol(&mut self) -> bool {
        if !self.eol() {
            return false;
        }
        while self.eol() {}
        true
    }

    // ----- Expressions

    pub fn is_expression(&mut self) -> Result<bool, SyntaxError> {
        if !self.is_arithmetic_expression()? {
            return Ok(false);
        }
        while self.is_comparator() {
            if !self.is_arithmetic_expression()? {
                return Err(self.error("no expression after comparator"));
            }
        }
        Ok(true)
    }

    pub fn is_arithmetic_expression(&mut self) -> Result<bool, SyntaxError> {
        // TODO: restore the leading sign when no term follows; it is
        // currently dropped inside an overall false return.
        let _leading_sign = self.symbol("+") || self.symbol("-");
        if !self.is_term()? {
            return Ok(false);
        }
        while self.is_add_operator() {
            if !self.is_term()? {
                return Err(self.error("no term after '+' or '-'"));
            }
        }
        Ok(true)
    }

    pub fn is_term(&mut self) -> Result<bool, SyntaxError> {
        if !self.is_factor()? {
            return Ok(false);
        }
        while self.is_multiply_operator() {
            if !self.is_term()? {
                return Err(self.error("no term after '*' or '/'"));
            }
        }
        Ok(true)
    }

    pub fn is_factor(&mut self) -> Result<bool, SyntaxError> {
        if self.symbol("+") || self.symbol("-") {
            if self.is_unsigned_factor()? {
                return Ok(true);
            }
            return Err(self.error("no factor after unary '+' or '-'"));
        }
        self.is_unsigned_factor()
    }

    /// `<unsigned factor> ::= <name> "." <name>
    ///                      | <name> <parameter list>
    ///                      | <name>
    ///                      | <number>
    ///                      | "(" <expression> ")"`
    pub fn is_unsigned_factor(&mut self) -> Result<bool, SyntaxError> {
        if self.is_variable() {
            if self.symbol(".") {
                // Reference to another bug's variable.
                if !self.name() {
                    return Err(self.error("no name after '.'"));
                }
            } else {
                // Function call arguments, if any.
                self.is_parameter_list()?;
            }
            return Ok(true);
        }
        if self.number() {
            return Ok(true);
        }
        if self.symbol("(") {
            if !self.is_expression()? {
                return Err(self.error("no expression after '('"));
            }
            if !self.symbol(")") {
                return Err(self.error("unclosed parenthesized expression"));
            }
            return Ok(true);
        }
        Ok(false)
    }

    pub fn is_parameter_list(&mut self) -> Result<bool, SyntaxError> {
        if !self.symbol("(") {
            return Ok(false);
        }
        if self.is_expression()? {
            while self.symbol(",") {
                if !self.is_expression()? {
                    return Err(self.error("no expression after ','"));
                }
            }
        }
        if !self.symbol(")") {
            return Err(self.error("parameter list doesn't end with ')'"));
        }
        Ok(true)
    }

    pub fn is_add_operator(&mut self) -> bool {
        self.symbol("+") || self.symbol("-")
    }

    pub fn is_multiply_operator(&mut self) -> bool {
        self.symbol("*") || self.symbol("/")
    }

    pub fn is_variable(&mut self) -> bool {
        self.name()
    }

    /// Recognizes `<`, `<=`, `=`, `!=`, `>=`, `>`. The two-character
    /// comparators arrive as two adjacent symbol tokens. A `!` not followed
    /// by `=` is not a comparator, and neither token is consumed.
    pub fn is_comparator(&mut self) -> bool {
        if self.symbol("<") || self.symbol(">") {
            self.symbol("=");
            return true;
        }
        let start = self.mark();
        if self.symbol("!") {
            if self.symbol("=") {
                return true;
            }
            self.rewind(start);
            return false;
        }
        self.symbol("=")
    }

    // ----- Token helpers

    fn next_token(&mut self) -> Token {
        let index = self.pos.min(self.tokens.len() - 1);
        let token = self.tokens[index].clone();
        if self.pos < self.tokens.len() {
            self.pos += 1;
        }
        self.fetched = true;
        token
    }

    fn push_back(&mut self) {
        debug_assert!(self.fetched, "push_back without an intervening fetch");
        self.fetched = false;
        if self.pos > 0 {
            self.pos -= 1;
        }
    }

    fn mark(&self) -> usize {
        self.pos
    }

    fn rewind(&mut self, pos: usize) {
        self.pos = pos;
        self.fetched = false;
    }

    fn next_token_matches(&mut self, kind: Kind) -> bool {
        let token = self.next_token();
        if token.kind == kind {
            return true;
        }
        self.push_back();
        false
    }

    fn next_token_matches_value(&mut self, kind: Kind, value: &str) -> bool {
        let token = self.next_token();
        if token.kind == kind && token.value == value {
            return true;
        }
        self.push_back();
        false
    }

    fn number(&mut self) -> bool {
        self.next_token_matches(Kind::Number)
    }

    fn name(&mut self) -> bool {
        self.next_token_matches(Kind::Name)
    }

    fn eol(&mut self) -> bool {
        self.next_token_matches(Kind::Eol)
    }

    fn eof(&mut self) -> bool {
        self.next_token_matches(Kind::Eof)
    }

    fn any_keyword(&mut self) -> bool {
        self.next_token_matches(Kind::Keyword)
    }

    fn keyword(&mut self, expected: &str) -> bool {
        self.next_token_matches_value(Kind::Keyword, expected)
    }

    fn symbol(&mut self, expected: &str) -> bool {
        self.next_token_matches_value(Kind::Symbol, expected)
    }

    fn error(&self, message: &str) -> SyntaxError {
        SyntaxError::new(message.to_string(), self.line)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn rec(text: &str) -> Recognizer {
        Recognizer::new(text)
    }

    #[test]
    fn accepts_minimal_program() {
        assert!(rec("Bug A {\nmove 1\n}\n").is_program().unwrap());
    }

    #[test]
    fn missing_close_brace_is_fatal() {
        assert!(rec("Bug A {\nmove 1\n").is_program().is_err());
    }

    #[test]
    fn empty_input_is_not_a_program() {
        assert_eq!(rec("").is_program().unwrap(), false);
    }

    #[test]
    fn accepts_two_bug_definitions() {
        let source = "Bug a {\nmove 1\n}\nBug b {\nturn 2\n}\n";
        assert!(rec(source).is_program().unwrap());
    }

    #[test]
    fn allbugs_without_bug_definition_is_fatal() {
        assert!(rec("Allbugs {\nvar x\n}\n").is_program().is_err());
    }

    #[test]
    fn trailing_tokens_are_fatal() {
        assert!(rec("Bug A {\nmove 1\n}\nmove\n").is_program().is_err());
        assert!(rec("Bug A {\nmove 1\n}\n\n").is_program().is_err());
    }

    #[test]
    fn accepts_full_program() {
        let source = "\
Allbugs {
var total
define distance using x1, y1 {
return x1 + y1
}
}
Bug martin {
var x, y
initially {
moveto 0, 0
}
loop {
move 3
turn 90
exit if x > 100
}
color red
do distance(x, y)
}
";
        assert!(rec(source).is_program().unwrap());
    }

    #[test]
    fn failed_matchers_consume_nothing() {
        let mut r = rec("move 1\n");
        assert!(!r.is_statement().unwrap());
        assert_eq!(r.pos, 0);
        assert!(r.is_action().unwrap());
    }

    #[test]
    fn idempotent_retrial_of_a_failing_matcher() {
        let mut r = rec("move 1\n");
        assert_eq!(r.is_bug_definition().unwrap(), false);
        assert_eq!(r.is_bug_definition().unwrap(), false);
        assert_eq!(r.pos, 0);
    }

    #[test]
    fn keywords_do_not_match_as_names() {
        // "Move" is a name, not the 'move' keyword; a lone name followed by
        // a number is neither an action nor an assignment.
        let mut r = rec("Move 1\n");
        assert!(!r.is_action().unwrap());
        assert!(!r.is_assignment_statement().unwrap());
        assert_eq!(r.pos, 0);
    }

    #[test]
    fn assignment_rolls_back_a_bare_variable() {
        let mut r = rec("x\n");
        assert!(!r.is_assignment_statement().unwrap());
        assert_eq!(r.pos, 0);
    }

    #[test]
    fn accepts_assignment_statement() {
        assert!(rec("x = y + 1\n").is_assignment_statement().unwrap());
    }

    #[test]
    fn assignment_without_expression_is_fatal() {
        assert!(rec("x = \n").is_assignment_statement().is_err());
    }

    #[test]
    fn recognizes_every_comparator() {
        for op in ["<", ">", "=", "<=", ">=", "!="] {
            assert!(rec(op).is_comparator(), "expected {:?} to match", op);
        }
    }

    #[test]
    fn bang_without_equals_is_not_a_comparator() {
        let mut r = rec("!5\n");
        assert!(!r.is_comparator());
        assert_eq!(r.pos, 0);
        assert!(!r.is_comparator());
    }

    #[test]
    fn comparator_in_expression() {
        assert!(rec("a < b").is_expression().unwrap());
        assert!(rec("a != b").is_expression().unwrap());
        assert!(rec("a <").is_expression().is_err());
    }

    #[test]
    fn accepts_parameter_lists() {
        assert!(rec("(1, 2, 3)").is_parameter_list().unwrap());
        assert!(rec("()").is_parameter_list().unwrap());
    }

    #[test]
    fn trailing_comma_in_parameter_list_is_fatal() {
        assert!(rec("(1,)").is_parameter_list().is_err());
    }

    #[test]
    fn unclosed_parameter_list_is_fatal() {
        assert!(rec("(1, 2\n").is_parameter_list().is_err());
    }

    #[test]
    fn parenthesized_expression_is_a_term() {
        assert!(rec("(1+2)*3").is_term().unwrap());
    }

    #[test]
    fn signed_factors() {
        assert!(rec("-5").is_factor().unwrap());
        assert!(rec("+x").is_factor().unwrap());
        assert!(rec("-").is_factor().is_err());
    }

    #[test]
    fn dot_notation_in_unsigned_factor() {
        assert!(rec("other.x").is_unsigned_factor().unwrap());
        assert!(rec("other.").is_unsigned_factor().is_err());
    }

    #[test]
    fn function_call_is_an_unsigned_factor() {
        assert!(rec("distance(a, b)").is_unsigned_factor().unwrap());
    }

    #[test]
    fn accepts_var_declaration() {
        assert!(rec("var a, b, c\n").is_var_declaration().unwrap());
        assert!(rec("var a,\n").is_var_declaration().is_err());
        assert!(rec("var\n").is_var_declaration().is_err());
    }

    #[test]
    fn accepts_loop_statement() {
        assert!(rec("loop {\nexit if x\n}\n").is_loop_statement().unwrap());
    }

    #[test]
    fn exit_without_if_is_fatal() {
        assert!(rec("exit x\n").is_exit_if_statement().is_err());
    }

    #[test]
    fn accepts_switch_statement() {
        let source = "switch {\ncase 1\nmove 1\ncase 2\nturn 2\n}\n";
        assert!(rec(source).is_switch_statement().unwrap());
    }

    #[test]
    fn accepts_empty_switch() {
        assert!(rec("switch {\n}\n").is_switch_statement().unwrap());
    }

    #[test]
    fn accepts_do_statement_with_and_without_parameters() {
        assert!(rec("do go(1, 2)\n").is_do_statement().unwrap());
        assert!(rec("do go\n").is_do_statement().unwrap());
        assert!(rec("do 5\n").is_do_statement().is_err());
    }

    #[test]
    fn color_requires_a_keyword() {
        assert!(rec("color red\n").is_color_statement().unwrap());
        assert!(rec("color mauve\n").is_color_statement().is_err());
    }

    #[test]
    fn line_action_takes_four_expressions() {
        assert!(rec("line 1, 2, 3, 4\n").is_line_action().unwrap());
        assert!(rec("line 1, 2\n").is_line_action().is_err());
    }

    #[test]
    fn blocks_allow_blank_lines() {
        let source = "{\n\nmove 1\n}\n\n";
        assert!(rec(source).is_block().unwrap());
    }

    #[test]
    fn malformed_command_in_block_is_fatal() {
        assert!(rec("{\n5\n}\n").is_block().is_err());
    }

    #[test]
    fn accepts_function_definitions() {
        assert!(rec("define f {\nreturn 1\n}\n").is_function_definition().unwrap());
        let with_params = "define f using a, b {\nreturn a + b\n}\n";
        assert!(rec(with_params).is_function_definition().unwrap());
    }

    #[test]
    fn function_definition_with_bad_parameter_tail_is_fatal() {
        assert!(rec("define f using a, {\n}\n").is_function_definition().is_err());
    }

    #[test]
    fn diagnostics_carry_a_line_number() {
        let err = rec("Bug A {\nmove 1\n").is_program().unwrap_err();
        assert_eq!(err.line, 1);
        assert!(!err.message.is_empty());
    }

    #[test]
    fn custom_keyword_set_changes_what_parses() {
        // With a keyword set that omits 'move', "move" lexes as a name and
        // the same text becomes an assignment candidate instead.
        let keywords = ["Bug"];
        let mut r = Recognizer::with_keywords("move = 1\n", &keywords);
        assert!(r.is_assignment_statement().unwrap());
    }
}
