//! Day 20: pulses propagating through a network of communication modules.

use std::collections::{BTreeMap, HashMap, VecDeque};

use itertools::Itertools;
use num_integer::Integer;
use tracing::debug;

use crate::puzzles::{Answer, PuzzleError};

const BUTTON: &str = "button";
const BROADCASTER: &str = "broadcaster";
const MACHINE: &str = "rx";
const PERIOD_SEARCH_LIMIT: u64 = 1 << 20;

/// A pulse is either low or high.
#[derive(Copy, Clone, Debug, Eq, PartialEq, Hash)]
pub enum Pulse {
    /// Low.
    Low,
    /// High.
    High,
}

/// The behaviour of a module, with whatever it remembers between pulses.
#[derive(Clone, Debug, Eq, PartialEq)]
pub enum Module {
    /// Repeats every pulse to all outputs.
    Broadcaster,
    /// Ignores high pulses; a low pulse toggles it and it sends high when switched on, low when switched off.
    FlipFlop {
        /// Whether the flip-flop is on.
        on: bool,
    },
    /// Remembers the latest pulse from each input; sends low only once every input last sent high.
    Conjunction {
        /// Latest pulse from each input, low until one arrives.
        memory: BTreeMap<String, Pulse>,
    },
    /// Swallows everything.
    Sink,
}

impl Module {
    /// Handle `pulse` arriving from `from`, returning the pulse sent to every output, if any.
    pub fn receive(&mut self, from: &str, pulse: Pulse) -> Option<Pulse> {
        match self {
            Self::Broadcaster => Some(pulse),
            Self::FlipFlop { on } => match pulse {
                Pulse::High => None,
                Pulse::Low => {
                    *on = !*on;
                    Some(if *on { Pulse::High } else { Pulse::Low })
                }
            },
            Self::Conjunction { memory } => {
                memory.insert(from.to_owned(), pulse);
                match memory.values().all(|p| *p == Pulse::High) {
                    true => Some(Pulse::Low),
                    false => Some(Pulse::High),
                }
            }
            Self::Sink => None,
        }
    }

    /// Return to the power-on state.
    pub fn reset(&mut self) {
        match self {
            Self::FlipFlop { on } => *on = false,
            Self::Conjunction { memory } => memory.values_mut().for_each(|p| *p = Pulse::Low),
            Self::Broadcaster | Self::Sink => {}
        }
    }
}

/// One pulse in flight.
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct Signal {
    /// Sending module.
    pub from: String,
    /// Receiving module.
    pub to: String,
    /// What was sent.
    pub pulse: Pulse,
}

/// Pulses sent, by kind.
#[derive(Copy, Clone, Debug, Default, Eq, PartialEq)]
pub struct PulseCounts {
    /// Low pulses sent, button presses included.
    pub low: u64,
    /// High pulses sent.
    pub high: u64,
}

#[derive(Clone, Debug)]
struct Node {
    module: Module,
    outputs: Vec<String>,
}

/// Every module of the network, wired together.
#[derive(Clone, Debug)]
pub struct Network {
    nodes: HashMap<String, Node>,
}

impl Network {
    /// Parse lines such as `broadcaster -> a, b`, `%a -> b` and `&inv -> a`.
    ///
    /// Modules only ever named as outputs become sinks.
    pub fn parse(input: &str) -> Result<Self, PuzzleError> {
        let mut nodes = HashMap::new();

        for (index, line) in input.lines().enumerate().filter(|(_, l)| !l.trim().is_empty()) {
            let (name, outputs) = line.split_once("->")
                .ok_or_else(|| PuzzleError::parse(index, "expected `name -> outputs`"))?;
            let outputs = outputs.split(',').map(|o| o.trim().to_owned()).filter(|o| !o.is_empty()).collect_vec();

            let name = name.trim();
            let (name, module) = match name.split_at(name.chars().next().map_or(0, char::len_utf8)) {
                ("%", rest) => (rest, Module::FlipFlop { on: false }),
                ("&", rest) => (rest, Module::Conjunction { memory: BTreeMap::new() }),
                _ if name == BROADCASTER => (name, Module::Broadcaster),
                _ => return Err(PuzzleError::parse(index, format!("unknown module {name:?}"))),
            };

            nodes.insert(name.to_owned(), Node { module, outputs });
        }

        if !nodes.contains_key(BROADCASTER) {
            return Err(PuzzleError::Missing("broadcaster"));
        }

        let wires = nodes.iter()
            .flat_map(|(name, node)| node.outputs.iter().map(move |output| (name.clone(), output.clone())))
            .collect_vec();
        for (from, to) in wires {
            let node = nodes.entry(to).or_insert_with(|| Node { module: Module::Sink, outputs: vec![] });
            if let Module::Conjunction { memory } = &mut node.module {
                memory.insert(from, Pulse::Low);
            }
        }

        Ok(Self { nodes })
    }

    /// Push the button once, showing every pulse to `observe` in the order it is delivered.
    pub fn press(&mut self, mut observe: impl FnMut(&Signal)) {
        let mut queue = VecDeque::from([Signal {
            from: BUTTON.to_owned(),
            to: BROADCASTER.to_owned(),
            pulse: Pulse::Low,
        }]);

        while let Some(signal) = queue.pop_front() {
            observe(&signal);

            let Some(node) = self.nodes.get_mut(&signal.to) else {
                continue;
            };
            let Some(pulse) = node.module.receive(&signal.from, signal.pulse) else {
                continue;
            };

            for output in &node.outputs {
                queue.push_back(Signal {
                    from: signal.to.clone(),
                    to: output.clone(),
                    pulse,
                });
            }
        }
    }

    /// Push the button `presses` times, counting every pulse sent.
    pub fn press_counting(&mut self, presses: usize) -> PulseCounts {
        let mut counts = PulseCounts::default();
        for _ in 0..presses {
            self.press(|signal| match signal.pulse {
                Pulse::Low => counts.low += 1,
                Pulse::High => counts.high += 1,
            });
        }
        counts
    }

    /// Return every module to its power-on state.
    pub fn reset(&mut self) {
        self.nodes.values_mut().for_each(|node| node.module.reset());
    }

    /// Fewest presses after which `target` receives a low pulse, starting from power-on.
    ///
    /// Assumes `target` is fed by a single conjunction whose inputs each send it high on a fixed period;
    /// the answer is then the least common multiple of those periods.
    pub fn presses_until_low(&mut self, target: &str) -> Option<u64> {
        let feeder = self.nodes.iter()
            .find(|(_, node)| node.outputs.iter().any(|o| o == target))
            .map(|(name, _)| name.clone())?;
        let inputs = match &self.nodes.get(&feeder)?.module {
            Module::Conjunction { memory } => memory.len(),
            _ => return None,
        };

        self.reset();
        let mut periods: HashMap<String, u64> = HashMap::new();
        for press in 1..=PERIOD_SEARCH_LIMIT {
            self.press(|signal| {
                if signal.to == feeder && signal.pulse == Pulse::High && !periods.contains_key(&signal.from) {
                    periods.insert(signal.from.clone(), press);
                }
            });

            if periods.len() == inputs {
                debug!(?periods, "found every input period");
                return Some(periods.values().fold(1, |acc, period| acc.lcm(period)));
            }
        }

        None
    }
}

/// Product of low and high pulse counts over 1000 presses.
pub fn part_one(input: &str) -> Answer {
    let counts = Network::parse(input)?.press_counting(1000);
    Ok(counts.low * counts.high)
}

/// Presses until the machine receives a low pulse.
pub fn part_two(input: &str) -> Answer {
    Network::parse(input)?
        .presses_until_low(MACHINE)
        .ok_or(PuzzleError::Missing("periodic conjunction feeding rx"))
}
