use std::fmt;

use colored::Colorize;

use super::entity::ThreatTarget;
use super::frame::TurnFrame;
use super::side::Side;
use super::threat::ThreatBoard;

impl fmt::Display for TurnFrame {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let ours = self.stats[Side::Ours];
        let theirs = self.stats[Side::Theirs];

        writeln!(
            f,
            "Base: {} hp {} mana | {} hp {} mana",
            ours.health.to_string().bright_blue(),
            ours.mana.to_string().bright_blue(),
            theirs.health.to_string().bright_red(),
            theirs.mana.to_string().bright_red()
        )?;
        write!(
            f,
            "Entities: {} monsters, {} heroes, {} enemy heroes",
            self.monsters().count(),
            self.own_heroes().count(),
            self.enemy_heroes().count()
        )?;

        Ok(())
    }
}

impl fmt::Display for ThreatBoard<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.is_empty() {
            return write!(f, "Threats: none");
        }

        writeln!(f, "Threats:")?;
        for (score, monster) in self.scored().take(5) {
            let line = format!(
                "  #{:<3} at {:>5} {:>4}  hp {:>2}  score {:.6}",
                monster.id, monster.pos.x, monster.pos.y, monster.health, score
            );

            if monster.threat_for == ThreatTarget::OurBase {
                writeln!(f, "{}", line.bright_red())?;
            } else {
                writeln!(f, "{}", line)?;
            }
        }

        Ok(())
    }
}
