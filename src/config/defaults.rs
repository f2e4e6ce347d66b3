//! Built-in default style.conf, used at startup and by reset

/// Stock dark theme shipped with the editor
pub const DEFAULT_STYLE_CONF: &str = r"; Appearance settings
; Written in UTF-8
; Overrides can be placed in ProgramData\aviutl2\style.conf

[Font]
; Default font family
DefaultFamily=BIZ UDGothic
; Standard control font
Control=13
; Edit control font (monospace recommended)
EditControl=13,Consolas
; Preview time display font
PreviewTime=16
; Layer/object editor font
LayerObject=12
; Frame time gauge font
TimeGauge=13
; Footer font
Footer=14
; Text edit font (monospace recommended)
TextEdit=16,Consolas
; Log font (monospace recommended)
Log=12,Consolas

[Color]
; Default background
Background=24273a
; Window border
WindowBorder=6e738d
; Background between windows
WindowSeparator=181926
; Footer background
Footer=1e2030
; Footer progress
FooterProgress=ff69b4,ff1493
Grouping=1e2030
GroupingHover=1e2030
GroupingSelect=1e2030
; Title header background
TitleHeader=363a4f
BorderSelect=454545
Border=1e2030
BorderFocus=2e2f2f
Text=cad3f5
TextDisable=6e738d
TextSelect=ffffff
; Button background
ButtonBody=363a4f
ButtonBodyHover=24273a
ButtonBodyPress=24273a
ButtonBodyDisable=24273a
ButtonBodySelect=7287fd
SliderCursor=daa520
TrackBarRange=1e2030
ZoomGauge=00bfff
ZoomGaugeHover=87cefa
ZoomGaugeOff=5f9ea0
ZoomGaugeOffHover=4682b4
FrameCursor=ff000080
FrameCursorWide=8b000080
PlayerCursor=ffff0080
GuideLine=ffa50080
; Layer background
Layer=181926
LayerHeader=1e2030
LayerHover=545454
LayerDisable=1e2030
LayerRange=8b451380
LayerRangeFrame=8b4513c8
; Timeline object colors
ObjectVideo=1e66f5,1e66f5
ObjectAudio=d20f39,d20f39
ObjectControl=179299,179299
ObjectVideoFilter=40a02b,40a02b
ObjectAudioFilter=df8e1d,df8e1d
ObjectHover=00ffffa0
ObjectFocus=00ff00
ObjectSection=d3d3d3
; Clipping object (bottom edge)
ClippingObject=00ffff
; Clipping object when visualized
ClippingObjectMask=00ffff40
; Anchor frame
Anchor=f5f5f5
; Anchor line
AnchorLine=ffdead80
; Anchor frame (start)
AnchorIn=adff2f
; Anchor frame (end)
AnchorOut=ff4500
; Anchor frame (hover)
AnchorHover=fffacd80
; Anchor frame (selected)
AnchorSelect=eee8aa
; Anchor frame edge
AnchorEdge=19197080
; Group center point
CenterGroup=00ff7f
HandleX=ff0000
HandleY=00ff00
HandleZ=0000ff
HandleXHover=ff69b4
HandleYHover=98fb98
HandleZHover=87ceeb
; Outside the display area
OutsideDisplay=1e2030

[Layout]
; Gap between windows
WindowSeparatorSize=7
; Scroll bar size
ScrollBarSize=20
; Footer height
FooterHeight=24
; Title header height
TitleHeaderHeight=18
; Time gauge height
TimeGaugeHeight=32
; Layer height (layer editor)
LayerHeight=26
; Layer name width (layer editor)
LayerHeaderWidth=96
SettingItemHeaderWidth=96
SettingItemHeight=22
SettingItemMarginWidth=6
; Settings header height
SettingHeaderHeight=48
; Player controller height
PlayerControlHeight=46
; Media explorer header height
ExplorerHeaderHeight=28
; Number of media explorers
ExplorerWindowNum=4
; List item height
ListItemHeight=26

[Format]
; Footer display format
; {ProjectName}  : project name
; {SceneName}    : scene name
; {Resolution}   : scene resolution
; {FrameRate}    : scene frame rate
; {SamplingRate} : scene sampling rate
; {CurrentTime}  : current time
; {TotalTime}    : total time
; {CurrentFrame} : current frame number
; {TotalFrame}   : total frame count
FooterLeft={CurrentTime} / {TotalTime}  |  {CurrentFrame} / {TotalFrame}
FooterRight={SceneName}  |  {Resolution}  |  {FrameRate}  |  {SamplingRate}
";
