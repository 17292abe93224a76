//! Aho-Corasick automaton over string tokens.

use std::collections::{HashMap, HashSet, VecDeque};

/// A trie node in the automaton arena.
///
/// `outputs` holds the ids of every pattern ending at this state, including
/// those inherited along the failure chain during construction, so `search`
/// never has to walk the chain per position.
#[derive(Debug, Default)]
struct Node {
    children: HashMap<String, u32>,
    fail: u32,
    outputs: Vec<u32>,
}

/// Multi-pattern Aho-Corasick automaton keyed by token identity.
///
/// Patterns are token sequences — grapheme clusters or pinyin syllables —
/// registered under their positional id. After construction, [`search`]
/// enumerates every pattern occurring as a contiguous infix of an input
/// sequence in a single left-to-right pass.
///
/// # Example
/// ```
/// use mohu_core::Automaton;
///
/// let toks = |s: &str| s.chars().map(|c| c.to_string()).collect::<Vec<_>>();
/// let ac = Automaton::build(&[toks("he"), toks("she"), toks("his")]);
///
/// assert_eq!(ac.search(&toks("she")), vec![0, 1]); // "he" inside "she"
/// assert_eq!(ac.search(&toks("hers")), vec![0]);
/// assert!(ac.search(&toks("xyz")).is_empty());
/// ```
///
/// [`search`]: Automaton::search
#[derive(Debug, Default)]
pub struct Automaton {
    nodes: Vec<Node>,
    pattern_count: usize,
}

impl Automaton {
    /// Construct the automaton from a pattern set.
    ///
    /// Pattern ids are the indices into `patterns`. Empty patterns are
    /// skipped: they occur in every input and carry no signal.
    pub fn build(patterns: &[Vec<String>]) -> Self {
        let mut ac = Self {
            nodes: vec![Node::default()],
            pattern_count: patterns.len(),
        };
        for (id, pattern) in patterns.iter().enumerate() {
            if !pattern.is_empty() {
                ac.insert(pattern, id as u32);
            }
        }
        ac.link_failures();
        ac
    }

    /// Number of patterns the automaton was built from.
    pub fn pattern_count(&self) -> usize {
        self.pattern_count
    }

    /// Ids of every pattern occurring as a contiguous infix of `tokens`,
    /// deduplicated and sorted ascending.
    pub fn search(&self, tokens: &[String]) -> Vec<u32> {
        let mut hits: HashSet<u32> = HashSet::new();
        let mut state = 0u32;
        for token in tokens {
            state = self.step(state, token);
            hits.extend(&self.nodes[state as usize].outputs);
        }
        let mut ids: Vec<u32> = hits.into_iter().collect();
        ids.sort_unstable();
        ids
    }

    fn insert(&mut self, pattern: &[String], id: u32) {
        let mut cur = 0usize;
        for token in pattern {
            cur = match self.nodes[cur].children.get(token) {
                Some(&next) => next as usize,
                None => {
                    let next = self.nodes.len() as u32;
                    self.nodes.push(Node::default());
                    self.nodes[cur].children.insert(token.clone(), next);
                    next as usize
                }
            };
        }
        self.nodes[cur].outputs.push(id);
    }

    /// Breadth-first failure-link construction. Outputs of the failure
    /// target are folded into each node as it is linked.
    fn link_failures(&mut self) {
        let mut queue: VecDeque<u32> = VecDeque::new();
        let roots: Vec<u32> = self.nodes[0].children.values().copied().collect();
        for child in roots {
            self.nodes[child as usize].fail = 0;
            queue.push_back(child);
        }

        while let Some(cur) = queue.pop_front() {
            let transitions: Vec<(String, u32)> = self.nodes[cur as usize]
                .children
                .iter()
                .map(|(token, &next)| (token.clone(), next))
                .collect();

            for (token, next) in transitions {
                queue.push_back(next);

                let mut fail = self.nodes[cur as usize].fail;
                let target = loop {
                    if let Some(&t) = self.nodes[fail as usize].children.get(&token) {
                        break t;
                    }
                    if fail == 0 {
                        break 0;
                    }
                    fail = self.nodes[fail as usize].fail;
                };

                self.nodes[next as usize].fail = target;
                let inherited = self.nodes[target as usize].outputs.clone();
                self.nodes[next as usize].outputs.extend(inherited);
            }
        }
    }

    // Goto transition with failure fallback.
    fn step(&self, mut state: u32, token: &str) -> u32 {
        loop {
            if let Some(&next) = self.nodes[state as usize].children.get(token) {
                return next;
            }
            if state == 0 {
                return 0;
            }
            state = self.nodes[state as usize].fail;
        }
    }
}
