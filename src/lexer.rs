use crate::token::{Kind, Token, KEYWORDS};

pub struct Lexer<'a> {
    chars: Vec<char>,
    current: usize,
    line: usize,
    position: usize,
    keywords: &'a [&'a str],
}

impl<'a> Lexer<'a> {
    pub fn new(input: &str) -> Self {
        Self::with_keywords(input, KEYWORDS)
    }

    /// Builds a lexer over a caller-supplied keyword set, so the lexicon can
    /// be exercised independently of the stock Bugs reserved words.
    pub fn with_keywords(input: &str, keywords: &'a [&'a str]) -> Self {
        Self {
            chars: input.chars().collect(),
            current: 0,
            line: 1,
            position: 0,
            keywords,
        }
    }

    fn at(&self) -> char {
        if self.current >= self.chars.len() {
            '\0'
        } else {
            self.chars[self.current]
        }
    }

    fn peek(&self) -> char {
        if self.current + 1 >= self.chars.len() {
            '\0'
        } else {
            self.chars[self.current + 1]
        }
    }

    fn advance(&mut self) {
        self.current += 1;
        self.position += 1;
    }

    fn is_eof(&self) -> bool {
        self.current >= self.chars.len()
    }

    fn create_token(&self, kind: Kind, value: String) -> Token {
        Token {
            line: self.line,
            position: self.position,
            kind,
            value,
        }
    }

    pub fn tokenize(&mut self) -> Vec<Token> {
        let mut tokens = Vec::new();

        while !self.is_eof() {
            let ch = self.at();
            match ch {
                '\n' => {
                    tokens.push(self.create_token(Kind::Eol, "\n".to_string()));
                    self.advance();
                    self.line += 1;
                    self.position = 0;
                }
                ch if ch.is_whitespace() => self.advance(),
                '/' if self.peek() == '/' => self.skip_line_comment(),
                '/' if self.peek() == '*' => self.skip_block_comment(),
                '"' => {
                    let token = self.read_quoted();
                    tokens.push(token);
                }
                ch if ch.is_ascii_digit() => {
                    let token = self.read_number();
                    tokens.push(token);
                }
                ch if ch.is_alphabetic() || ch == '_' => {
                    let token = self.read_word();
                    tokens.push(token);
                }
                _ => {
                    // Everything else is a one-character symbol; "<=" and
                    // friends are assembled by the grammar layer.
                    tokens.push(self.create_token(Kind::Symbol, ch.to_string()));
                    self.advance();
                }
            }
        }

        tokens.push(self.create_token(Kind::Eof, "EndOfFile".to_string()));
        tokens
    }

    fn skip_line_comment(&mut self) {
        // The terminating newline stays in the stream and is lexed as an Eol.
        while !self.is_eof() && self.at() != '\n' {
            self.advance();
        }
    }

    fn skip_block_comment(&mut self) {
        self.advance(); // '/'
        self.advance(); // '*'

        while !self.is_eof() {
            if self.at() == '*' && self.peek() == '/' {
                self.advance();
                self.advance();
                return;
            }
            if self.at() == '\n' {
                self.advance();
                self.line += 1;
                self.position = 0;
            } else {
                self.advance();
            }
        }
        // Unterminated comment runs to end of input.
    }

    fn read_number(&mut self) -> Token {
        let position = self.position;
        let mut text = String::new();

        while self.at().is_ascii_digit() {
            text.push(self.at());
            self.advance();
        }
        if self.at() == '.' {
            text.push('.');
            self.advance();
            while self.at().is_ascii_digit() {
                text.push(self.at());
                self.advance();
            }
        }

        Token {
            line: self.line,
            position,
            kind: Kind::Number,
            value: text,
        }
    }

    fn read_word(&mut self) -> Token {
        let position = self.position;
        let mut text = String::new();

        while self.at().is_alphanumeric() || self.at() == '_' {
            text.push(self.at());
            self.advance();
        }

        let kind = if self.keywords.contains(&text.as_str()) {
            Kind::Keyword
        } else {
            Kind::Name
        };

        Token {
            line: self.line,
            position,
            kind,
            value: text,
        }
    }

    fn read_quoted(&mut self) -> Token {
        let position = self.position;
        self.advance(); // opening quote

        let mut text = String::new();
        while !self.is_eof() && self.at() != '"' && self.at() != '\n' {
            text.push(self.at());
            self.advance();
        }
        if self.at() == '"' {
            self.advance();
        }

        Token {
            line: self.line,
            position,
            kind: Kind::Quoted,
            value: text,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn kinds(text: &str) -> Vec<Kind> {
        Lexer::new(text).tokenize().into_iter().map(|t| t.kind).collect()
    }

    fn values(text: &str) -> Vec<String> {
        Lexer::new(text).tokenize().into_iter().map(|t| t.value).collect()
    }

    #[test]
    fn empty_input_is_a_lone_eof() {
        let tokens = Lexer::new("").tokenize();
        assert_eq!(tokens.len(), 1);
        assert_eq!(tokens[0].kind, Kind::Eof);
        assert_eq!(tokens[0].value, "EndOfFile");
    }

    #[test]
    fn keywords_are_case_sensitive() {
        assert_eq!(
            kinds("move Move"),
            vec![Kind::Keyword, Kind::Name, Kind::Eof]
        );
    }

    #[test]
    fn color_names_are_keywords() {
        assert_eq!(
            kinds("red mauve darkGray darkgray"),
            vec![Kind::Keyword, Kind::Name, Kind::Keyword, Kind::Name, Kind::Eof]
        );
    }

    #[test]
    fn newline_is_a_significant_token() {
        assert_eq!(
            kinds("move 1\nturn 2\n"),
            vec![
                Kind::Keyword,
                Kind::Number,
                Kind::Eol,
                Kind::Keyword,
                Kind::Number,
                Kind::Eol,
                Kind::Eof
            ]
        );
    }

    #[test]
    fn line_comment_keeps_its_newline() {
        assert_eq!(
            kinds("move 1 // to the east\nturn 2\n"),
            vec![
                Kind::Keyword,
                Kind::Number,
                Kind::Eol,
                Kind::Keyword,
                Kind::Number,
                Kind::Eol,
                Kind::Eof
            ]
        );
    }

    #[test]
    fn block_comment_swallows_interior_newlines() {
        let tokens = Lexer::new("move /* a\nb */ 1\n").tokenize();
        let kinds: Vec<Kind> = tokens.iter().map(|t| t.kind.clone()).collect();
        assert_eq!(kinds, vec![Kind::Keyword, Kind::Number, Kind::Eol, Kind::Eof]);
        // The line counter still advances inside the comment.
        assert_eq!(tokens[1].line, 2);
    }

    #[test]
    fn unterminated_block_comment_runs_to_end_of_input() {
        assert_eq!(kinds("move /* 1\n2"), vec![Kind::Keyword, Kind::Eof]);
    }

    #[test]
    fn signs_are_separate_symbol_tokens() {
        assert_eq!(
            kinds("-5 +3.5"),
            vec![Kind::Symbol, Kind::Number, Kind::Symbol, Kind::Number, Kind::Eof]
        );
        assert_eq!(values("-5"), vec!["-", "5", "EndOfFile"]);
    }

    #[test]
    fn decimal_point_is_part_of_a_number() {
        assert_eq!(values("3.14"), vec!["3.14", "EndOfFile"]);
    }

    #[test]
    fn two_character_comparators_are_two_symbols() {
        assert_eq!(values("<="), vec!["<", "=", "EndOfFile"]);
        assert_eq!(values(">="), vec![">", "=", "EndOfFile"]);
        assert_eq!(values("!="), vec!["!", "=", "EndOfFile"]);
    }

    #[test]
    fn quoted_text_holds_the_enclosed_characters() {
        let tokens = Lexer::new("\"hello bug\"").tokenize();
        assert_eq!(tokens[0].kind, Kind::Quoted);
        assert_eq!(tokens[0].value, "hello bug");
    }

    #[test]
    fn unclosed_quote_ends_at_the_newline() {
        let tokens = Lexer::new("\"oops\nmove").tokenize();
        assert_eq!(tokens[0].kind, Kind::Quoted);
        assert_eq!(tokens[0].value, "oops");
        assert_eq!(tokens[1].kind, Kind::Eol);
    }

    #[test]
    fn injected_keyword_set_replaces_the_default() {
        let keywords = ["begin", "end"];
        let tokens = Lexer::with_keywords("begin move end", &keywords).tokenize();
        let kinds: Vec<Kind> = tokens.into_iter().map(|t| t.kind).collect();
        assert_eq!(kinds, vec![Kind::Keyword, Kind::Name, Kind::Keyword, Kind::Eof]);
    }

    #[test]
    fn token_positions_point_at_the_token_start() {
        let tokens = Lexer::new("move 12").tokenize();
        assert_eq!(tokens[0].position, 0);
        assert_eq!(tokens[1].position, 5);
    }
}
