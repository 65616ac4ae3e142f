//! Day 12: counting the arrangements of damaged springs consistent with a condition record.

use std::collections::HashMap;

use crate::puzzles::{Answer, PuzzleError};

/// One line of the input: a condition record and the sizes of its contiguous damaged groups.
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct Record {
    /// `#` damaged, `.` operational, `?` unknown.
    pub conditions: Vec<u8>,
    /// Sizes of the damaged groups, left to right.
    pub groups: Vec<usize>,
}

impl Record {
    /// Parse `"???.### 1,1,3"`. `index` is only used in errors.
    pub fn parse(index: usize, line: &str) -> Result<Self, PuzzleError> {
        let (conditions, groups) = line.split_once(' ')
            .ok_or_else(|| PuzzleError::parse(index, "expected a record and group sizes"))?;

        if let Some(bad) = conditions.chars().find(|c| !matches!(c, '#' | '.' | '?')) {
            return Err(PuzzleError::parse(index, format!("unexpected spring {bad:?}")));
        }

        let groups = groups.split(',')
            .map(|size| size.trim().parse::<usize>())
            .collect::<Result<Vec<_>, _>>()
            .map_err(|e| PuzzleError::parse(index, e.to_string()))?;

        Ok(Self { conditions: conditions.as_bytes().to_vec(), groups })
    }

    /// Five copies of the record joined by `?`, with the group list repeated five times.
    pub fn unfolded(&self) -> Self {
        let conditions = vec![self.conditions.clone(); 5].join(&b'?');

        Self { conditions, groups: self.groups.repeat(5) }
    }

    /// Number of ways to fill in the unknowns so the damaged groups match.
    pub fn arrangements(&self) -> u64 {
        let mut memo = HashMap::new();
        count(&self.conditions, &self.groups, &mut memo)
    }
}

fn count<'a>(conditions: &'a [u8], groups: &'a [usize], memo: &mut HashMap<(&'a [u8], &'a [usize]), u64>) -> u64 {
    let Some(&size) = groups.first() else {
        return u64::from(!conditions.contains(&b'#'));
    };

    // every group needs its springs plus one separator before the next
    let needed = groups.iter().sum::<usize>() + groups.len() - 1;
    if conditions.len() < needed {
        return 0;
    }

    if let Some(known) = memo.get(&(conditions, groups)) {
        return *known;
    }

    let mut total = 0;
    if conditions[0] != b'#' {
        total += count(&conditions[1..], groups, memo);
    }
    if conditions[0] != b'.' {
        let fits = !conditions[..size].contains(&b'.') && conditions.get(size) != Some(&b'#');
        if fits {
            total += count(conditions.get(size + 1..).unwrap_or(&[]), &groups[1..], memo);
        }
    }

    memo.insert((conditions, groups), total);
    total
}

fn parse(input: &str) -> Result<Vec<Record>, PuzzleError> {
    input.lines()
        .enumerate()
        .filter(|(_, line)| !line.trim().is_empty())
        .map(|(index, line)| Record::parse(index, line.trim()))
        .collect()
}

/// Sum of arrangement counts.
pub fn part_one(input: &str) -> Answer {
    Ok(parse(input)?.iter().map(Record::arrangements).sum())
}

/// Sum of arrangement counts after unfolding every record.
pub fn part_two(input: &str) -> Answer {
    Ok(parse(input)?.iter().map(|record| record.unfolded().arrangements()).sum())
}
