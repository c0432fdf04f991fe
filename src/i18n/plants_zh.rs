/// Common houseplant names offered to the suggestion filter (Chinese).
pub const COMMON_HOUSEPLANTS: &[&str] = &[
    "非洲紫罗兰",
    "芦荟",
    "火鹤花",
    "散尾葵",
    "箭头藤",
    "芦笋蕨",
    "婴儿橡皮树",
    "天堂鸟",
    "波士顿蕨",
    "卡拉蒂亚",
    "万年青",
    "圣诞仙人掌",
    "变叶木",
    "万年青",
    "龙血树",
    "龙树",
    "常春藤",
    "琴叶榕",
    "网纹草",
    "黄金葛",
    "心叶蔓绿绒",
    "翡翠木",
    "肯特亚棕榈",
    "富贵竹",
    "龟背竹",
    "发财树",
    "白鹤芋",
    "巴西蔓绿绒",
    "马尾铁",
    "祈祷草",
    "橡皮树",
    "虎尾兰",
    "吊兰",
    "珍珠串",
    "瑞士奶酪植物",
    "金钱树",
    "红掌",
    "海芋",
    "秋海棠",
    "凤梨科植物",
    "仙人掌",
    "铸铁植物",
    "中国钱币草",
    "彩叶草",
    "玉米棒",
    "仙客来",
    "魔鬼常春藤",
    "象耳",
    "榕树",
    "火鹤花",
    "栀子花",
    "天竺葵",
    "霍亚",
    "凤仙花",
    "茉莉花",
    "长寿花",
    "薰衣草",
    "柠檬树",
    "富贵竹",
    "铁线蕨",
    "明日叶",
    "蝴蝶兰",
    "神经草",
    "诺福克松树",
    "兰花",
    "酢浆草",
    "客厅棕榈",
    "椒草",
    "波斯盾",
    "斑点草",
    "绿萝",
    "紫叶心",
    "响尾蛇植物",
    "红祈祷草",
    "雷克斯秋海棠",
    "迷迭香",
    "苏铁",
    "鹅掌柴",
    "银葛",
    "裂叶蔓绿绒",
    "鹿角蕨",
    "心形串",
    "多肉植物",
    "瑞士奶酪藤",
    "铁树",
    "紫露草",
    "伞树",
    "捕蝇草",
    "流浪犹太人",
    "西瓜皮椒草",
    "蜡花",
    "白鹭天堂鸟",
    "丝兰",
    "斑马植物",
    "空气凤梨",
    "铝植物",
    "天使翼秋海棠",
    "秋蕨",
    "婴儿泪",
    "竹棕榈",
    "鸟巢蕨",
    "蓝星蕨",
    "纽扣蕨",
    "彩叶芋",
    "马蹄莲",
    "宿雾蓝葛",
    "中国扇棕",
    "圣诞棕榈",
    "朱蕉",
    "爬山虎",
    "基督荆棘",
    "哑巴杆",
    "象牙木",
    "翡翠椒草",
    "假竹芋",
    "琴叶榕",
    "鱼骨仙人掌",
    "火焰花",
    "霜蕨",
    "彩叶变叶木",
    "金尘变叶木",
    "金球仙人掌",
    "黄金葛",
    "葡萄常春藤",
    "绿祈祷草",
    "夏威夷铁树",
    "心叶蕨",
    "冬青蕨",
    "心叶蔓绿绒",
    "日本鹅掌柴",
    "宝石兰",
    "天鹅绒卡拉蒂亚",
    "袋鼠爪蕨",
    "红掌",
    "棕竹",
    "柠檬钮扣蕨",
    "柠檬青龙血树",
    "柠檬青蔓绿绒",
    "富贵竹",
    "马达加斯加龙血树",
    "帝王棕榈",
    "明蕨",
    "月亮仙人掌",
    "马赛克植物",
    "落地生根",
    "神经草",
    "夜开花",
    "诺福克松树",
    "章鱼树",
    "兰花仙人掌",
    "牡蛎植物",
    "桨叶植物",
    "彩绘夫人石莲花",
    "熊猫植物",
    "客厅棕榈",
    "白鹤芋",
    "铅笔仙人掌",
    "厚叶椒草",
    "波斯盾",
    "背包草",
    "粉红公主蔓绿绒",
    "条纹卡拉蒂亚",
    "猪笼草",
    "鸡蛋花",
    "斑点秋海棠",
    "马尾铁",
    "祈祷草",
    "紫色激情草",
    "紫色华夫草",
    "兔脚蕨",
    "彩虹植物",
    "红粗肋草",
    "红祈祷草",
    "红脉祈祷草",
    "雷克斯秋海棠",
    "迷迭香",
    "橡皮树",
    "苏铁",
    "绒毛葛",
    "银斑藤属",
    "银元植物",
    "银葛",
    "虎尾兰",
    "吊兰",
    "裂叶蔓绿绒",
    "鹿角蕨",
    "香蕉串",
    "心形串",
    "珍珠串",
    "龟背竹串",
    "多肉植物",
    "瑞士奶酪植物",
    "瑞士奶酪藤",
    "铁树",
    "紫露草",
    "树蔓绿绒",
    "伞树",
    "捕蝇草",
    "流浪犹太人",
    "西瓜皮椒草",
    "蜡花",
    "白鹭天堂鸟",
    "白巫师蔓绿绒",
    "丝兰",
    "斑马植物",
    "斑马仙人掌",
    "斑马十二卷",
    "百日菊",
    "金钱树",
];
