use crate::model::{QuestEntry, Requirement, SkillRequirementBlock};

/// Attach every skill requirement whose quest name equals an entry's name
/// (exact, case-sensitive) to that entry. Blocks are left untouched.
pub fn attach_requirements(quests: &mut [QuestEntry], blocks: &[SkillRequirementBlock]) {
    for quest in quests.iter_mut() {
        for block in blocks {
            for item in &block.quests {
                if item.quest == quest.name {
                    quest.reqs.push(Requirement {
                        skill: block.skill.clone(),
                        level: item.level,
                        boostable: item.boostable,
                    });
                }
            }
        }
    }
}
