//! Narrative passages and prompts.

pub const INTRO: &str = "\
Only the foolhardy or the very brave would willingly risk a journey into Darkwood Forest, \
where strange, twisting paths wind their way into the eerie depths.
Who knows what monstrous creatures lurk in the threatening shadows, or what deadly adventures \
await the unwary traveller?";

pub const INTRO_PROMPT: &str =
    "You dare enter (yes/no) (or type 'save'/'save <slot>'/'load'/'load <slot>'): ";

pub const QUEST: &str = "\
In a desperate race against time, deep within Darkwood, your quest is to find the missing \
pieces of the legendary Hammer of Stonebridge, forged by dwarfs to protect peaceful Stonebridge \
against its ancient doom.

Many dangers lie ahead and your success is by no means certain.

You carry a sword and a backpack of provisions for the trip.";

pub const DECLINED: &str = "Thank you for playing!";

pub const READY_PROMPT: &str =
    "Type \"ready\" when you wish to generate your strengths and weaknesses (or type 'save'/'load'): ";

pub const POTIONS: &str = "\
You are armed with a sword and dressed in leather armour. You may take a bottle of one of \
the following potions:

Potion of Skill - restores SKILL points
Potion of Strength - restores STAMINA
Potion of Fortune - restores LUCK and adds 1 initial LUCK";

pub const POTION_PROMPT: &str = "Which potion do you wish to choose? (skill, strength, fortune) \
(or type 'save'/'save <slot>'/'load'/'load <slot>'): ";

pub const BACKGROUND: &str = "\
BACKGROUND:
You are an adventurer, a sword for hire, roaming the northern borderlands of the kingdom. \
One evening, as your campfire dies, a twig cracks in the bushes. Behind them lies a dying \
dwarf, two poisoned crossbow bolts in his side.

\"Take the hammer to Gillibran... the map in my pouch will lead you to Yaztromo, the master \
mage... he sells magics to protect you in Darkwood... take my gold...\"

Bigleg breathes his last. In his pouch you find gold and a map. In the morning you bury the \
old dwarf and head south to find this Yaztromo and see what he has to offer.";

pub const YAZTROMO: &str = "\
Half a day's walk brings you, dirty and hungry, to a stone tower on the edge of Darkwood. \
You ring the brass bell at the oak door. A slot slides open and two eyes examine you.

\"Well, who are you?\" demands a grumpy voice.

You explain that you seek the master mage Yaztromo, to buy magical items against the \
creatures of the forest.

\"Oh! Well, in that case you'd better come up. I am Yaztromo.\"";

pub const YAZTROMO_TURNS: &str = "He then turns and slowly climbs the stone stairs.";

pub const YAZTROMO_PROMPT: &str = "Will you:\nFollow him up the stairs?\nDraw your sword and attack him\n\
(follow/attack) (or type 'save'/'save <slot>'/'load'/'load <slot>'): ";

pub const FOLLOW: &str = "\
You follow the huffing old man up the spiral staircase to a room crammed with bottles, jars, \
weapons, armour, and strange artefacts. Yaztromo slumps into an oak chair, perches a pair of \
gold-rimmed spectacles on his nose, and scribbles furiously on a piece of slate.

He then hands you the slate.";

pub const ATTACK: &str = "\
You draw your sword and attack Yaztromo! He turns, surprised, and raises his hand. A bolt of \
energy knocks you back, ending your adventure prematurely.";

pub const GAME_OVER: &str = "Game Over!";

pub const TO_BE_CONTINUED: &str =
    "To be continued... (further adventures in Darkwood Forest are coming soon!)";
