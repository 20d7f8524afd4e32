pub struct Reader<'a> {
    code: &'a str,
    position: usize,
}

impl<'a> Reader<'a> {
    #[must_use]
    pub fn new(code: &'a str) -> Reader<'a> {
        Reader { code, position: 0 }
    }

    /// The unconsumed suffix of the code.
    #[must_use]
    pub fn rest(&self) -> &'a str {
        &self.code[self.position..]
    }

    #[must_use]
    pub fn is_exhausted(&self) -> bool {
        self.position >= self.code.len()
    }

    /// `len` is a byte length taken from a match against `rest`, so the new
    /// position always lands on a char boundary.
    pub fn forward(&mut self, len: usize) {
        self.position += len;
    }
}
