use std::collections::VecDeque;

/// Bounded FIFO of characters waiting to be reported to the keypad poll.
///
/// The queue never grows to `capacity - 1` characters: the last slot of
/// the native buffer is the terminator, and one more is kept free. An
/// append that would cross that line is rejected whole.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TextQueue {
    chars: VecDeque<char>,
    capacity: usize,
}

impl TextQueue {
    pub fn new(capacity: usize) -> Self {
        Self {
            chars: VecDeque::with_capacity(capacity),
            capacity,
        }
    }

    pub fn len(&self) -> usize {
        self.chars.len()
    }

    pub fn is_empty(&self) -> bool {
        self.chars.is_empty()
    }

    fn fits(&self, incoming: usize) -> bool {
        self.chars.len() + incoming < self.capacity.saturating_sub(1)
    }

    /// Append one character. Returns false if it was dropped.
    pub fn push_char(&mut self, c: char) -> bool {
        if !self.fits(1) {
            return false;
        }
        self.chars.push_back(c);
        true
    }

    /// Append all characters of `text`, or none of them.
    /// Returns false if the text was dropped.
    pub fn push_str(&mut self, text: &str) -> bool {
        let incoming = text.chars().count();
        if !self.fits(incoming) {
            return false;
        }
        self.chars.extend(text.chars());
        true
    }

    /// Remove and return the oldest character
    pub fn pop_front(&mut self) -> Option<char> {
        self.chars.pop_front()
    }

    /// Queued characters, oldest first
    pub fn iter(&self) -> impl Iterator<Item = char> + '_ {
        self.chars.iter().copied()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_fifo_order() {
        let mut queue = TextQueue::new(8);
        assert!(queue.push_str("ab"));
        assert!(queue.push_char('c'));
        assert_eq!(queue.iter().collect::<String>(), "abc");
        assert_eq!(queue.pop_front(), Some('a'));
        assert_eq!(queue.iter().next(), Some('b'));
        assert_eq!(queue.len(), 2);
    }

    #[test]
    fn test_rejects_whole_string_at_limit() {
        let mut queue = TextQueue::new(8);
        assert!(queue.push_str("abcd"));
        // 4 + 3 = 7 reaches capacity - 1
        assert!(!queue.push_str("efg"));
        assert_eq!(queue.iter().collect::<String>(), "abcd");
        assert!(queue.push_str("ef"));
        assert_eq!(queue.len(), 6);
    }

    #[test]
    fn test_single_char_limit() {
        let mut queue = TextQueue::new(4);
        assert!(queue.push_char('x'));
        assert!(queue.push_char('y'));
        assert!(!queue.push_char('z'));
        assert_eq!(queue.len(), 2);
    }

    #[test]
    fn test_counts_characters_not_bytes() {
        let mut queue = TextQueue::new(4);
        assert!(queue.push_str("éü"));
        assert_eq!(queue.len(), 2);
        assert_eq!(queue.pop_front(), Some('é'));
    }

    #[test]
    fn test_tiny_capacity_accepts_nothing() {
        let mut queue = TextQueue::new(1);
        assert!(!queue.push_char('a'));
        assert!(queue.is_empty());
    }

    #[test]
    fn test_drains_and_refills() {
        let mut queue = TextQueue::new(4);
        assert!(queue.push_str("ab"));
        assert!(!queue.push_char('c'));
        assert_eq!(queue.pop_front(), Some('a'));
        assert!(queue.push_char('c'));
        assert_eq!(queue.iter().collect::<String>(), "bc");
    }
}
