/// A position in the source text. Both fields are 1-based.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub struct Pos {
    pub chr: usize,
    pub line: usize
}

impl Pos {
    pub fn new() -> Self {
        Pos { chr: 1, line: 1 }
    }

    pub fn at(line: usize, chr: usize) -> Self {
        Pos { chr, line }
    }

    pub fn next_char(&mut self) {
        self.chr += 1;
    }

    pub fn next_line(&mut self) {
        self.line += 1;
        self.chr = 1;
    }
}
