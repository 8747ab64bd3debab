//! Boss rotation solving and whitelist scoring.
//!
//! Boss encounters follow one of a fixed set of cyclic orders. Once a couple
//! of combat rooms have been observed, the remaining bosses are usually
//! forced; `solve` fills them in whenever every surviving candidate agrees.

use crate::room::Boss;

// ---------------------------------------------------------------------------
// Known rotations
// ---------------------------------------------------------------------------

/// Fixed cyclic boss orders an instance can roll.
pub const ROTATIONS: [[Boss; 8]; 3] = [
    [
        Boss::Tekton,
        Boss::Vasa,
        Boss::Guardians,
        Boss::Mystics,
        Boss::Shamans,
        Boss::Muttadiles,
        Boss::Vanguards,
        Boss::Vespula,
    ],
    [
        Boss::Tekton,
        Boss::Muttadiles,
        Boss::Guardians,
        Boss::Vespula,
        Boss::Shamans,
        Boss::Vasa,
        Boss::Vanguards,
        Boss::Mystics,
    ],
    [
        Boss::Vespula,
        Boss::Vanguards,
        Boss::Mystics,
        Boss::Shamans,
        Boss::Muttadiles,
        Boss::Guardians,
        Boss::Vasa,
        Boss::Tekton,
    ],
];

// ---------------------------------------------------------------------------
// Solver
// ---------------------------------------------------------------------------

/// Fill `Unknown` bosses from the known-rotation table.
///
/// A candidate is a (rotation, start offset) pair whose cyclic window agrees
/// with every already-known boss. Each unknown position is filled only when
/// all candidates put the same boss there; with no known bosses, or no
/// agreement, the sequence is left as-is for a later pass.
///
/// Returns `true` when every boss in the sequence is known on exit.
pub fn solve(bosses: &mut [Boss]) -> bool {
    if bosses.is_empty() {
        return true;
    }

    let known: Vec<(usize, Boss)> = bosses
        .iter()
        .copied()
        .enumerate()
        .filter(|(_, boss)| *boss != Boss::Unknown)
        .collect();

    if !known.is_empty() {
        let candidates: Vec<(usize, usize)> = ROTATIONS
            .iter()
            .enumerate()
            .flat_map(|(r, rotation)| (0..rotation.len()).map(move |offset| (r, offset)))
            .filter(|&(r, offset)| {
                known
                    .iter()
                    .all(|&(i, boss)| ROTATIONS[r][(offset + i) % ROTATIONS[r].len()] == boss)
            })
            .collect();

        if !candidates.is_empty() {
            for (i, slot) in bosses.iter_mut().enumerate() {
                if *slot != Boss::Unknown {
                    continue;
                }
                let (r0, o0) = candidates[0];
                let proposed = ROTATIONS[r0][(o0 + i) % ROTATIONS[r0].len()];
                let unanimous = candidates
                    .iter()
                    .all(|&(r, o)| ROTATIONS[r][(o + i) % ROTATIONS[r].len()] == proposed);
                if unanimous {
                    *slot = proposed;
                }
            }
        }
    }

    bosses.iter().all(|boss| *boss != Boss::Unknown)
}

// ---------------------------------------------------------------------------
// Whitelist scoring
// ---------------------------------------------------------------------------

fn tokens(list: &str) -> Vec<String> {
    list.split(',')
        .map(|part| part.trim().to_lowercase())
        .filter(|part| !part.is_empty())
        .collect()
}

/// Score a rotation string against the user's whitelisted rotations.
///
/// An exact match scores the full boss count. Otherwise each whitelist
/// entry is scanned positionally: only an unbroken matching prefix counts,
/// a prefix shorter than 2 never qualifies, and an entry longer than the
/// rotation never qualifies (running past the rotation's end is a
/// mismatch). The best qualifying score across all entries is returned,
/// 0 when none qualify.
pub fn rotation_matches(rotation: &str, whitelist: &[String]) -> usize {
    let actual = tokens(rotation);
    let mut best = 0;

    for entry in whitelist {
        let wanted = tokens(entry);
        if wanted.is_empty() {
            continue;
        }

        if wanted == actual {
            best = best.max(actual.len());
            continue;
        }

        // An entry with more bosses than the rotation runs past its end.
        if wanted.len() > actual.len() {
            continue;
        }

        let prefix = wanted
            .iter()
            .zip(actual.iter())
            .take_while(|(w, a)| w == a)
            .count();

        // A single coincidental first-boss overlap is not a match.
        if prefix >= 2 {
            best = best.max(prefix);
        }
    }

    best
}
