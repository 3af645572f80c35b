use rand::rngs::StdRng;
use rand::seq::SliceRandom;

/// One gift direction: a santa and the recipient they drew.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Pairing {
    pub santa: String,
    pub recipient: Option<String>,
}

impl Pairing {
    pub fn new(santa: impl Into<String>) -> Self {
        Self {
            santa: santa.into(),
            recipient: None,
        }
    }
}

#[derive(Debug, thiserror::Error)]
pub enum AllocationError {
    #[error("{santa} drew themselves as recipient")]
    SelfAssignment { santa: String },
    #[error("{santa} was left without a recipient")]
    Unassigned { santa: String },
}

/// Draws a recipient for every santa, in input order.
///
/// Each recipient is taken from the pool of names not yet claimed, never the
/// santa's own. The caller seeds the rng once; equal seed and input give an
/// identical draw.
pub fn allocate(
    mut pairings: Vec<Pairing>,
    rng: &mut StdRng,
) -> Result<Vec<Pairing>, AllocationError> {
    let last_santa = match pairings.last() {
        Some(pairing) => pairing.santa.clone(),
        None => return Ok(pairings),
    };
    let mut remaining: Vec<String> = pairings.iter().map(|p| p.santa.clone()).collect();

    for pairing in pairings.iter_mut() {
        let mut options: Vec<String> = remaining
            .iter()
            .filter(|name| **name != pairing.santa)
            .cloned()
            .collect();

        // With exactly two candidates left and the final santa among them, the
        // pick is forced: handing out the other name would leave the final
        // santa with only themselves in the pool. Checked on options, not on
        // the remaining pool.
        let choice = if options.len() == 2 && options.contains(&last_santa) {
            last_santa.clone()
        } else {
            options.shuffle(rng);
            match options.pop() {
                Some(name) => name,
                None => {
                    return Err(AllocationError::Unassigned {
                        santa: pairing.santa.clone(),
                    })
                }
            }
        };

        if let Some(pos) = remaining.iter().position(|name| *name == choice) {
            remaining.remove(pos);
        }
        pairing.recipient = Some(choice);
    }

    verify(&pairings)?;
    Ok(pairings)
}

/// Post-allocation safety net: every pairing must have a recipient and no
/// santa may have drawn themselves. Never expected to fail after a successful
/// `allocate` run.
pub fn verify(pairings: &[Pairing]) -> Result<(), AllocationError> {
    for pairing in pairings {
        match pairing.recipient.as_deref() {
            None => {
                return Err(AllocationError::Unassigned {
                    santa: pairing.santa.clone(),
                })
            }
            Some(recipient) if recipient == pairing.santa => {
                return Err(AllocationError::SelfAssignment {
                    santa: pairing.santa.clone(),
                })
            }
            Some(_) => {}
        }
    }
    Ok(())
}
