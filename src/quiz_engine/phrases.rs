//! Static phrase corpora.
//!
//! Opaque data: every table is a non-empty ordered list and callers only ever
//! index into it uniformly at random.

use crate::quiz_engine::models::{FeedbackCategory, Operation};

/// Opener / body / closer fragments for one score band.
pub struct SummaryFragments {
    pub openers: &'static [&'static str],
    pub bodies: &'static [&'static str],
    pub closers: &'static [&'static str],
}

pub fn summary_fragments(category: FeedbackCategory) -> &'static SummaryFragments {
    match category {
        FeedbackCategory::Perfect => &PERFECT,
        FeedbackCategory::Great   => &GREAT,
        FeedbackCategory::Good    => &GOOD,
        FeedbackCategory::Bad     => &BAD,
    }
}

pub fn closing_remarks(category: FeedbackCategory) -> &'static [&'static str] {
    match category {
        FeedbackCategory::Perfect => CLOSING_PERFECT,
        FeedbackCategory::Great   => CLOSING_GREAT,
        FeedbackCategory::Good    => CLOSING_GOOD,
        FeedbackCategory::Bad     => CLOSING_BAD,
    }
}

pub fn tips(operation: Operation) -> &'static [&'static str] {
    match operation {
        Operation::Add      => ADDITION_TIPS,
        Operation::Subtract => SUBTRACTION_TIPS,
        Operation::Multiply => MULTIPLICATION_TIPS,
        Operation::Divide   => DIVISION_TIPS,
    }
}

// ── summary fragments ────────────────────────────────────────────────────────

static PERFECT: SummaryFragments = SummaryFragments {
    openers: &[
        "来自M78星云的急电！", "简直是奇迹！", "光之国全体起立！", "奥特之父发来贺电！",
        "不可思议的能量反应！", "太完美了！", "这就是传说的战士吗？", "赛罗奥特曼为你点赞！",
    ],
    bodies: &[
        "你以满分的成绩守护了地球！", "所有的怪兽都在你的智慧面前颤抖！",
        "你的计算速度超越了光速！", "这种力量甚至超越了等离子火花！",
        "没有任何一道题能难倒你！", "你的准确率达到了百分之百！",
        "你就是我们要寻找的光之继承者！", "怪兽还没反应过来就被你消灭了！",
    ],
    closers: &[
        "光之国的历史将刻下你的名字！", "继续保持，新的英雄！", "你就是未来的希望！",
        "让我们一起飞向宇宙吧！", "完美的战斗，致敬！", "你是最强的！",
    ],
};

static GREAT: SummaryFragments = SummaryFragments {
    openers: &[
        "干得漂亮！", "非常优秀的战绩！", "佐菲队长很满意！", "战斗非常精彩！",
        "好样的，特级战士！", "怪兽已被击退！", "胜利属于你！",
    ],
    bodies: &[
        "虽然战斗激烈，但你成功击败了大部分怪兽！", "你的光芒已经足够耀眼！",
        "只差一点点就能成为传说！", "你的反应速度非常快！",
        "大部分难题都被你轻松解决了！", "这就是宇宙警备队的实力！",
    ],
    closers: &[
        "下次争取一个都不漏掉！", "继续磨练你的光线技能吧！", "地球的和平由你守护！",
        "稍微休息一下，准备迎接新挑战！", "我看好你，加油！",
    ],
};

static GOOD: SummaryFragments = SummaryFragments {
    openers: &[
        "任务完成！", "战斗结束！", "还不错哦！", "辛苦了，战士！",
        "坚持到了最后！", "虽然受了点伤！",
    ],
    bodies: &[
        "有些怪兽很狡猾，但你没有退缩！", "你做对了很多题，继续努力！",
        "只要消灭剩下的错误，你就是最强的！", "哪怕能量灯闪烁，你也没有放弃！",
        "这是一场艰难的战斗，但你赢了！",
    ],
    closers: &[
        "特训之后你会更强！", "这就是奥特精神！", "下次我们一定能赢回来！",
        "不要气馁，继续加油！", "光永远与你同在！",
    ],
};

static BAD: SummaryFragments = SummaryFragments {
    openers: &[
        "站起来，英雄！", "别灰心！", "这是一次特训！", "不要哭泣！",
        "呼叫奥特支援！", "怪兽太强了吗？",
    ],
    bodies: &[
        "一次失败不代表结束，奥特曼也输过！", "把眼泪化作力量，去复习错题吧！",
        "你的潜力是无限的，相信自己！", "失败是成功之母，我们重新来过！",
        "只要心中有光，就永远不会输！",
    ],
    closers: &[
        "让我们回光之国特训吧！", "再试一次，你能行！", "我看好你，加油啊！",
        "为了地球，请不要放弃！", "下一次，必胜！",
    ],
};

// ── spoken closing remarks ───────────────────────────────────────────────────

const CLOSING_PERFECT: &[&str] = &[
    "简直是奇迹！你以满分的成绩守护了地球！光之国的历史书上将刻下你的名字！",
    "太强了！所有的怪兽都在你的智慧面前颤抖！你就是新的光之巨人！",
    "完美无缺的计算！你的大脑里一定藏着等离子火花塔的能量！",
    "不可思议！连佐菲队长都会对你竖起大拇指！你已经超越了特级战士的水平！",
    "这就是奥特精神！没有任何难题能阻挡你前进的脚步！满分！",
    "你的智慧光芒照亮了整个宇宙！M78星云为你感到骄傲！",
    "不仅速度快，而且准确率百分之百！你就是我们要找的超级人间体！",
    "没有任何失误！你的专注力比奥特屏障还要坚固！",
    "英雄！你用完美的算术击败了黑暗！地球的未来交给你我放心了！",
    "这种力量...是满分的力量！你已经觉醒了真正的光！",
];

const CLOSING_GREAT: &[&str] = &[
    "干得漂亮！虽然战斗很激烈，但你成功击退了大部分怪兽！胜利属于你！",
    "非常优秀的成绩！你的光芒已经足够耀眼，只差一点点就能成为传说！",
    "英雄的战斗总是充满挑战，你表现得非常棒！继续磨练光线技能吧！",
    "很棒！大部分难题都被你解决了！剩下的那些小怪兽，下次一定能打败它们！",
    "这就是宇宙警备队的实力吗？做得好！稍微休息一下，准备迎接新的挑战！",
    "你的计算能力很强！只要再多一点点细心，你就能成为奥特之王！",
    "好样的！地球的和平被你守护住了！下次争取一个都不漏掉！",
    "强大的能量反应！你已经掌握了数学光线的精髓，继续加油！",
];

const CLOSING_GOOD: &[&str] = &[
    "战斗结束！虽然受了点伤，但你坚持到了最后！这就是奥特精神！",
    "还不错！有些怪兽很狡猾，但你没有退缩！特训之后你会更强！",
    "哪怕能量指示灯开始闪烁，你也没有放弃！这份勇气值得表扬！",
    "这是一场艰难的战斗。你做对了很多题，只要消灭剩下的错误，你就是最强的！",
    "不要气馁！奥特曼也需要不断的练习才能发射出强大的光线！",
    "只要心中有光，无论失败多少次都能站起来！下次我们一定能赢回来！",
];

const CLOSING_BAD: &[&str] = &[
    "站起来，英雄！一次失败不代表结束！奥特曼也曾被怪兽打倒，但我们通过特训变强了！",
    "不要哭泣！把眼泪化作力量！去复习一下错题，那是你变强的钥匙！",
    "看来怪兽很强大。但请相信，你的潜力是无限的！让我们回光之国特训吧！",
    "虽然这次输了，但只要你不放弃，光就永远不会消失！再试一次！",
    "听着，真正的英雄不是从不失败，而是失败后依然敢于挑战！我看好你！",
    "深呼吸，集中精神！数学怪兽并不可怕，可怕的是失去信心！加油啊！",
];

// ── per-answer voice lines ───────────────────────────────────────────────────

pub const PRAISE: &[&str] = &[
    "斯派修姆光线！好样的！", "正义必胜！做得好！", "你拥有光的力量！",
    "奥特光线！回答正确！", "精彩的计算！", "怪兽被打倒了！",
    "能量满满！你做到了！", "好快的速度，英雄！", "光与你同在！",
    "完美！继续保持！", "你的大脑里有等离子火花！", "M78星云发来贺电！",
    "这道题被你秒杀了！", "光之巨人为你点赞！", "准确率百分之百！",
    "奥特意念！计算正确！", "像赛罗一样帅气！", "你的智慧超越了美菲拉斯星人！",
    "守护地球的任务交给你了！", "这招是...奥特计算光线！", "太强了，简直是光之国的希望！",
    "连佐菲队长都对你点头！", "怪兽根本不是你的对手！", "不仅快，而且准！",
    "这种力量，难道是...奇迹型？", "保持这个节奏，特级战士！", "你的计算像八分光轮一样犀利！",
    "没有怪兽能逃过你的眼睛！", "胜利属于光之战士！", "太棒了！彩色计时器还是蓝色的！",
    "完全正确！", "你的数学水平已经是宇宙级了！", "光之能量正在汇聚！",
    "一击必杀！", "这就是奥特曼的智慧！", "没有任何破绽！",
    "继续前进，向着光！", "你的潜力无限大！", "又一只怪兽被净化了！",
    "奥特之父都在夸你！", "闪耀吧，光之子！", "绝对的计算力！",
    "这就是你的必杀技吗？太强了！", "没有什么能难倒你！", "光芒万丈！",
    "漂亮的解题思路！", "你就是数学界的迪迦！", "完美的逻辑！",
    "宇宙警备队需要你！", "继续战斗，不要停下！",
];

pub const ENCOURAGEMENT: &[&str] = &[
    "别放弃！", "彩色计时器在闪烁，加油啊！", "站起来，英雄！",
    "我们绝不投降！", "集中精神！", "相信未来！",
    "汇聚光芒！", "还没结束呢！", "保持坚强！",
    "再试一次，守护者！", "怪兽有点强，但你更强！", "这点困难算什么！",
    "深呼吸，感受光的能量！", "失败是成功之母，特训开始！", "不要让光芒熄灭！",
    "奥特曼也输过，但最后都赢了！", "仔细看清怪兽的弱点！", "不要慌，重新计算能量！",
    "光之国在看着你！", "把眼泪化作勇气！", "相信自己，你可以的！",
    "只是一次小小的失误！", "重新站起来，发射光线！", "不要被黑暗吞噬！",
    "你的潜力还没完全爆发！", "再来一次，这次一定行！", "奥特之星在指引你！",
    "坚持就是胜利！", "冷静思考，看穿它的诡计！", "我们一起打败它！",
    "不要气馁，英雄！", "哪怕倒下，也要向前倒！", "心中的光永远不会消失！",
    "特训之后，你会更强！", "这道题只是个小喽啰！", "用勇气填满彩色计时器！",
    "调整姿态，准备反击！", "你的光芒正在觉醒！", "不要害怕犯错！",
    "每一次失败都是为了更伟大的胜利！", "你可以战胜它的！", "想想爱迪奥特曼老师会怎么做！",
    "数学怪兽虽然狡猾，但你有智慧！", "加油！光在呼唤你！", "不到最后一刻绝不放弃！",
    "让我们一起通过这道难关！", "英雄是不会被打倒的！", "擦干眼泪，继续战斗！",
    "下一次，必胜！", "为了地球的和平，再算一次！",
];

// ── error-explanation tips ───────────────────────────────────────────────────

pub const MULTIPLY_BY_ZERO: &str = "记住哦：0乘以任何数都等于0！这是宇宙定律！";
pub const ZERO_DIVIDED: &str = "记住哦：0除以任何数（非0）都还是0！";
pub const EQUAL_SUBTRACTION: &str = "两个一样的数相减，结果肯定是0啦！";

const ADDITION_TIPS: &[&str] = &[
    "试试'凑十法'：看到9想到1，看到8想到2，先把一个数凑成10更好算！",
    "数位要对齐：个位加个位，十位加十位，满十别忘了进一哦！",
    "把大数记在心里，小数伸出手指接着数，这样会更快！",
    "交换律：两个数相加，交换位置和不变，挑好算的先算。",
    "如果接近整十数（比如19, 28），可以先按整十加，再减去多加的数。",
];

const SUBTRACTION_TIPS: &[&str] = &[
    "试试'破十法'：十几减九，几加一；十几减八，几加二。",
    "想加算减：想一想，多少加上减数等于被减数？",
    "个位不够减时，记得向十位借一当十，别忘了借位！",
    "如果减数接近整十，可以先减整十，再把多减的补回来。",
    "被减数和减数同时加上一个数，差不变，试试把减数凑成整十。",
];

const MULTIPLICATION_TIPS: &[&str] = &[
    "乘法口诀背熟了吗？一一得一，二二得四...",
    "任何数乘以0都等于0，任何数乘以1都等于它自己。",
    "积的个位通常由两个因数的个位决定，先算个位试试。",
    "如果乘以9，可以看作乘以10再减去原数（比如 9x6 = 60-6）。",
    "乘以5的技巧：任何偶数乘5，就是那一半再加0（如6x5=30）。",
];

const DIVISION_TIPS: &[&str] = &[
    "除法是乘法的逆运算，想一想括号里填几能算出被除数？",
    "试商技巧：除数乘以几最接近被除数？",
    "0除以任何不是0的数，结果都是0哦！",
    "余数一定要比除数小，如果余数大了说明商小了。",
    "从高位除起，一位一位往下算，不够除就商0。",
];
